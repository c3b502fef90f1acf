//! Invoice recalculation adapter

use std::time::Duration;

use shared::billing::{InvoiceLineItem, InvoiceTotals};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::{CancellationToken, DropGuard};

use super::debounce::{self, DEBOUNCE_QUIET_PERIOD};
use super::RecalcError;
use crate::totals::invoice::{self, InvoiceCalcInput};

/// Reactive adapter for one invoice form session
///
/// Owns the background worker that recomputes aggregate totals after each
/// quiet period. Instant row totals are recomputed synchronously inside
/// [`update`](Self::update). Dropping the adapter (or calling
/// [`shutdown`](Self::shutdown)) cancels any pending recomputation so
/// nothing is published against a discarded form.
pub struct InvoiceRecalc {
    // Declared first: teardown must cancel the worker before the input
    // channel closes underneath it.
    _cancel_on_drop: DropGuard,
    inputs: watch::Sender<InvoiceCalcInput>,
    rows: watch::Sender<Vec<InvoiceLineItem>>,
    totals: watch::Receiver<InvoiceTotals>,
    shutdown: CancellationToken,
    worker: Option<JoinHandle<()>>,
}

impl InvoiceRecalc {
    /// Spawn an adapter with the standard quiet period
    pub fn spawn(initial: InvoiceCalcInput) -> Self {
        Self::spawn_with_quiet_period(initial, DEBOUNCE_QUIET_PERIOD)
    }

    /// Spawn with a custom quiet period. Reset-on-change semantics are
    /// fixed; only the length of the quiet period varies.
    pub fn spawn_with_quiet_period(initial: InvoiceCalcInput, quiet_period: Duration) -> Self {
        // Seed both outputs synchronously so a freshly opened form starts
        // from correct values instead of waiting out a quiet period.
        let initial_result = invoice::calculate(&initial);

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
            |input: &InvoiceCalcInput| invoice::calculate(input).totals,
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

    /// Push the latest form state.
    ///
    /// Row totals are recomputed synchronously, published on
    /// [`rows`](Self::rows), and returned so the table can bind them
    /// immediately. Aggregates follow on [`totals`](Self::totals) once the
    /// input has been quiet.
    pub fn update(
        &self,
        input: InvoiceCalcInput,
    ) -> Result<Vec<InvoiceLineItem>, RecalcError> {
        if self.shutdown.is_cancelled() {
            return Err(RecalcError::WorkerGone);
        }
        let annotated = invoice::calculate_item_totals(&input.items);
        self.rows.send_replace(annotated.clone());
        self.inputs
            .send(input)
            .map_err(|_| RecalcError::WorkerGone)?;
        Ok(annotated)
    }

    /// Instant per-row totals (updated synchronously on every edit)
    pub fn rows(&self) -> watch::Receiver<Vec<InvoiceLineItem>> {
        self.rows.subscribe()
    }

    /// Debounced aggregate totals (the summary panel binds to this)
    pub fn totals(&self) -> watch::Receiver<InvoiceTotals> {
        self.totals.clone()
    }

    /// Latest published aggregates
    pub fn current_totals(&self) -> InvoiceTotals {
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
fn totals_differ(prev: &InvoiceTotals, next: &InvoiceTotals) -> bool {
    prev.final_total != next.final_total
        || prev.gst_amount != next.gst_amount
        || prev.gross_total != next.gross_total
}
