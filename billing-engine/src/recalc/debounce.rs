//! Quiet-period recalculation worker
//!
//! One worker runs per document session. Input snapshots arrive on a watch
//! channel; after a change, the worker waits out a quiet period that
//! restarts on every further change, then computes against the latest
//! snapshot only. A pending wait never outlives newer input and is
//! cancelled outright on session teardown.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Quiet period before aggregates are recomputed
///
/// A UX smoothing constant, not a correctness requirement; the adapters
/// accept an override but the reset-on-change semantics are fixed.
pub const DEBOUNCE_QUIET_PERIOD: Duration = Duration::from_millis(200);

/// Spawn the debounce worker for one document session.
///
/// `compute` runs against the latest input snapshot once the quiet period
/// elapses. `differs` compares the fresh result with the last published one
/// (headline totals); when it reports no difference the result is dropped
/// instead of re-published, sparing downstream re-renders.
pub(crate) fn spawn_worker<I, O, C, D>(
    mut inputs: watch::Receiver<I>,
    outputs: watch::Sender<O>,
    shutdown: CancellationToken,
    quiet_period: Duration,
    mut last_published: Option<O>,
    compute: C,
    differs: D,
) -> JoinHandle<()>
where
    I: Clone + Send + Sync + 'static,
    O: Clone + Send + Sync + 'static,
    C: Fn(&I) -> O + Send + 'static,
    D: Fn(&O, &O) -> bool + Send + 'static,
{
    tokio::spawn(async move {
        tracing::debug!("recalc worker started");
        loop {
            // Wait for the first change of a burst
            tokio::select! {
                _ = shutdown.cancelled() => break,
                changed = inputs.changed() => {
                    if changed.is_err() {
                        break;
                    }
                }
            }

            // Quiet period: every further change restarts the wait, so a
            // pending recomputation is always superseded by newer input.
            let mut input_gone = false;
            loop {
                tokio::select! {
                    _ = shutdown.cancelled() => {
                        tracing::debug!("recalc worker cancelled with pending recomputation");
                        return;
                    }
                    _ = tokio::time::sleep(quiet_period) => break,
                    changed = inputs.changed() => {
                        if changed.is_err() {
                            // Input side gone mid-burst; settle the last
                            // snapshot, then exit on the next outer wait.
                            input_gone = true;
                            break;
                        }
                    }
                }
            }

            // Teardown may race the input channel closing; a cancelled
            // session must never publish.
            if shutdown.is_cancelled() {
                tracing::debug!("recalc worker cancelled with pending recomputation");
                return;
            }

            let snapshot = inputs.borrow_and_update().clone();
            let result = compute(&snapshot);

            let should_publish = last_published
                .as_ref()
                .is_none_or(|prev| differs(prev, &result));
            if should_publish {
                tracing::trace!("publishing recalculated aggregates");
                outputs.send_replace(result.clone());
                last_published = Some(result);
            } else {
                tracing::trace!("aggregates unchanged, publish suppressed");
            }

            if input_gone {
                break;
            }
        }
        tracing::debug!("recalc worker stopped");
    })
}
