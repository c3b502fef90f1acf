//! Docket recalculation adapter

use std::time::Duration;

use shared::billing::{DocketLineItem, DocketTotals};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::{CancellationToken, DropGuard};

use super::debounce::{self, DEBOUNCE_QUIET_PERIOD};
use super::RecalcError;
use crate::totals::docket::{self, DocketCalcInput};

/// Reactive adapter for one docket form session
///
/// The docket twin of [`InvoiceRecalc`](super::InvoiceRecalc): synchronous
/// row nets and totals, quiet-period aggregates, cancel-on-teardown.
pub struct DocketRecalc {
    // Declared first: teardown must cancel the worker before the input
    // channel closes underneath it.
    _cancel_on_drop: DropGuard,
    inputs: watch::Sender<DocketCalcInput>,
    rows: watch::Sender<Vec<DocketLineItem>>,
    totals: watch::Receiver<DocketTotals>,
    shutdown: CancellationToken,
    worker: Option<JoinHandle<()>>,
}

impl DocketRecalc {
    /// Spawn an adapter with the standard quiet period
    pub fn spawn(initial: DocketCalcInput) -> Self {
        Self::spawn_with_quiet_period(initial, DEBOUNCE_QUIET_PERIOD)
    }

    /// Spawn with a custom quiet period
    pub fn spawn_with_quiet_period(initial: DocketCalcInput, quiet_period: Duration) -> Self {
        let initial_result = docket::calculate(&initial);

        let (inputs, inputs_rx) = watch::channel(initial);
        let (rows, _) = watch::channel(initial_result.items_with_totals);
        let (totals_tx, totals) = watch::channel(initial_result.totals.clone());
        let shutdown = CancellationToken::new();

        let worker = debounce::spawn_worker(
            inputs_rx,
            totals_tx,
            shutdown.clone(),
            quiet_period,
            Some(initial_result.totals),
            |input: &DocketCalcInput| docket::calculate(input).totals,
            totals_differ,
        );

        Self {
            inputs,
            rows,
            totals,
            _cancel_on_drop: shutdown.clone().drop_guard(),
            shutdown,
            worker: Some(worker),
        }
    }

    /// Push the latest form state; returns the synchronously annotated rows
    /// (net and total populated)
    pub fn update(&self, input: DocketCalcInput) -> Result<Vec<DocketLineItem>, RecalcError> {
        if self.shutdown.is_cancelled() {
            return Err(RecalcError::WorkerGone);
        }
        let annotated = docket::calculate_item_totals(&input.items);
        self.rows.send_replace(annotated.clone());
        self.inputs
            .send(input)
            .map_err(|_| RecalcError::WorkerGone)?;
        Ok(annotated)
    }

    /// Instant per-row nets and totals
    pub fn rows(&self) -> watch::Receiver<Vec<DocketLineItem>> {
        self.rows.subscribe()
    }

    /// Debounced aggregate totals
    pub fn totals(&self) -> watch::Receiver<DocketTotals> {
        self.totals.clone()
    }

    /// Latest published aggregates
    pub fn current_totals(&self) -> DocketTotals {
        self.totals.borrow().clone()
    }

    /// Cancel any pending recomputation and wait for the worker to exit
    pub async fn shutdown(&mut self) {
        self.shutdown.cancel();
        if let Some(worker) = self.worker.take() {
            let _ = worker.await;
        }
    }
}

/// Publish guard: compare on the headline fields the summary renders
fn totals_differ(prev: &DocketTotals, next: &DocketTotals) -> bool {
    prev.final_total != next.final_total
        || prev.gst_amount != next.gst_amount
        || prev.gross_total != next.gross_total
}
