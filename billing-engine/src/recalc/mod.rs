//! Reactive Recalculation Module
//!
//! Bridges the pure calculators to an interactive form. Each adapter keeps
//! two outputs at different cadences:
//!
//! - **instant rows**: per-row totals, recomputed synchronously on every
//!   edit (the line-item table binds to these);
//! - **debounced aggregates**: the full cascade, recomputed only after the
//!   input has been quiet for [`DEBOUNCE_QUIET_PERIOD`], so the summary
//!   panel is not re-rendered on every keystroke. Every edit restarts the
//!   wait, and value-identical results are not re-published.

pub mod debounce;
pub mod docket;
pub mod invoice;

pub use debounce::DEBOUNCE_QUIET_PERIOD;
pub use docket::DocketRecalc;
pub use invoice::InvoiceRecalc;

/// Errors from the adapter layer
///
/// The calculators themselves never fail (malformed numeric input degrades
/// to zero); the only failure here is pushing an update into a session that
/// has already been torn down.
#[derive(Debug, thiserror::Error)]
pub enum RecalcError {
    #[error("recalculation worker has shut down")]
    WorkerGone,
}
