//! Logging Infrastructure
//!
//! Structured logging setup with support for both development and
//! production environments:
//! - console output, pretty for development or JSON for production
//! - optional daily rotating application logs, deleted after 14 days

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Application log files older than this are deleted
const MAX_LOG_AGE_DAYS: u64 = 14;

/// Clean up old application log files
///
/// Call this periodically (the file-logging setup schedules it hourly) to
/// keep the log directory bounded.
pub fn cleanup_old_logs(log_dir: &Path) -> anyhow::Result<()> {
    let cutoff = SystemTime::now() - Duration::from_secs(MAX_LOG_AGE_DAYS * 24 * 60 * 60);

    let app_log_dir = log_dir.join("app");
    if !app_log_dir.exists() {
        return Ok(());
    }

    for entry in fs::read_dir(app_log_dir)? {
        let entry = entry?;
        let path = entry.path();

        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if name.starts_with("app")
            && path.is_file()
            && let Ok(meta) = entry.metadata()
            && let Ok(modified) = meta.modified()
            && modified < cutoff
        {
            fs::remove_file(&path)?;
            tracing::info!(file = %name, "Deleted old log file");
        }
    }

    Ok(())
}

/// Initialize the logging system with optional daily rotating file logs
///
/// # Arguments
/// * `level` - Default log level (e.g. "info", "debug"), overridable via
///   `RUST_LOG`
/// * `json_format` - JSON output for production, pretty for development
/// * `log_dir` - Optional directory for file logging (e.g. `Some("./logs")`)
pub fn init_logger_with_file(
    level: &str,
    json_format: bool,
    log_dir: Option<&str>,
) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match log_dir {
        Some(dir) => {
            let log_dir = Path::new(dir);
            let app_log_dir = log_dir.join("app");
            fs::create_dir_all(&app_log_dir)?;

            // Daily rotating appender for application logs
            let app_log = RollingFileAppender::new(Rotation::DAILY, app_log_dir, "app");

            if json_format {
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(fmt::layer().json().with_target(true).with_current_span(true))
                    .with(
                        fmt::layer()
                            .json()
                            .with_target(true)
                            .with_current_span(true)
                            .with_ansi(false)
                            .with_writer(std::sync::Mutex::new(app_log)),
                    )
                    .init();
            } else {
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(fmt::layer().with_target(true))
                    .with(
                        fmt::layer()
                            .with_target(true)
                            .with_ansi(false)
                            .with_writer(std::sync::Mutex::new(app_log)),
                    )
                    .init();
            }

            // Keep the log directory bounded
            tokio::spawn(periodic_cleanup(log_dir.to_path_buf()));
        }
        None => {
            if json_format {
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(fmt::layer().json().with_target(true).with_current_span(true))
                    .init();
            } else {
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(fmt::layer().with_target(true))
                    .init();
            }
        }
    }

    Ok(())
}

/// Periodic cleanup task - runs every hour to clean old logs
async fn periodic_cleanup(log_dir: PathBuf) {
    loop {
        tokio::time::sleep(Duration::from_secs(3600)).await;

        if let Err(e) = cleanup_old_logs(&log_dir) {
            tracing::error!(error = %e, "Failed to cleanup old logs");
        }
    }
}

/// Initialize the logging system (console only)
///
/// Convenience function for console-only logging
pub fn init_logger(level: &str, json_format: bool) -> anyhow::Result<()> {
    init_logger_with_file(level, json_format, None)
}
