//! Debounce contract tests for the recalculation adapters
//!
//! Run under a paused clock so the quiet period is driven explicitly with
//! `tokio::time::advance`: a burst of edits inside one quiet period must
//! produce exactly one aggregate publish, computed from the state after the
//! last edit.

use std::time::Duration;

use billing_engine::recalc::RecalcError;
use billing_engine::{DocketCalcInput, DocketRecalc, InvoiceCalcInput, InvoiceRecalc};
use shared::billing::{Deduction, DocketLineItem, InvoiceLineItem};

fn invoice_item(quantity: f64, price: f64) -> InvoiceLineItem {
    InvoiceLineItem {
        quantity: Some(quantity),
        price: Some(price),
        ..InvoiceLineItem::new()
    }
}

fn docket_item(gross: f64, tare: f64, price: f64) -> DocketLineItem {
    DocketLineItem {
        gross: Some(gross),
        tare: Some(tare),
        price: Some(price),
        ..DocketLineItem::new()
    }
}

fn invoice_input(items: Vec<InvoiceLineItem>) -> InvoiceCalcInput {
    InvoiceCalcInput {
        items,
        ..Default::default()
    }
}

/// Let spawned workers observe the latest sends without moving the clock
async fn settle() {
    for _ in 0..16 {
        tokio::task::yield_now().await;
    }
}

#[tokio::test(start_paused = true)]
async fn burst_of_edits_publishes_once_with_final_state() {
    let recalc = InvoiceRecalc::spawn(InvoiceCalcInput::default());
    let mut totals = recalc.totals();
    totals.mark_unchanged();

    // Five edits 50ms apart: each one restarts the quiet period
    for qty in 1..=5 {
        if qty > 1 {
            tokio::time::advance(Duration::from_millis(50)).await;
            settle().await;
        }
        recalc
            .update(invoice_input(vec![invoice_item(qty as f64, 100.0)]))
            .unwrap();
        settle().await;
    }

    // 199ms after the last edit: still quiet, nothing published
    tokio::time::advance(Duration::from_millis(199)).await;
    settle().await;
    assert!(!totals.has_changed().unwrap());

    // Quiet period elapses: exactly one publish, from the last edit
    tokio::time::advance(Duration::from_millis(2)).await;
    settle().await;
    assert!(totals.has_changed().unwrap());
    let published = totals.borrow_and_update().clone();
    assert_eq!(published.items_total, 500.0);
    assert_eq!(published.gst_amount, 50.0);
    assert_eq!(published.final_total, 550.0);

    // And nothing further without new input
    tokio::time::advance(Duration::from_millis(500)).await;
    settle().await;
    assert!(!totals.has_changed().unwrap());
}

#[tokio::test(start_paused = true)]
async fn spaced_edits_publish_separately() {
    let recalc = InvoiceRecalc::spawn(InvoiceCalcInput::default());
    let mut totals = recalc.totals();
    totals.mark_unchanged();

    recalc
        .update(invoice_input(vec![invoice_item(1.0, 100.0)]))
        .unwrap();
    settle().await;
    tokio::time::advance(Duration::from_millis(201)).await;
    settle().await;
    assert!(totals.has_changed().unwrap());
    assert_eq!(totals.borrow_and_update().final_total, 110.0);

    recalc
        .update(invoice_input(vec![invoice_item(2.0, 100.0)]))
        .unwrap();
    settle().await;
    tokio::time::advance(Duration::from_millis(201)).await;
    settle().await;
    assert!(totals.has_changed().unwrap());
    assert_eq!(totals.borrow_and_update().final_total, 220.0);
}

#[tokio::test(start_paused = true)]
async fn value_identical_aggregates_are_not_republished() {
    let item = invoice_item(2.0, 50.0);
    let recalc = InvoiceRecalc::spawn(invoice_input(vec![item.clone()]));
    let mut totals = recalc.totals();
    totals.mark_unchanged();

    // Renaming a row changes the rows, not the money
    let mut renamed = item;
    renamed.description = "Shredded steel".into();
    recalc.update(invoice_input(vec![renamed])).unwrap();
    settle().await;

    tokio::time::advance(Duration::from_millis(201)).await;
    settle().await;
    assert!(!totals.has_changed().unwrap());
    assert_eq!(recalc.current_totals().final_total, 110.0);
}

#[tokio::test(start_paused = true)]
async fn instant_rows_update_synchronously() {
    let recalc = InvoiceRecalc::spawn(InvoiceCalcInput::default());
    let rows_rx = recalc.rows();

    let returned = recalc
        .update(invoice_input(vec![invoice_item(2.0, 50.0)]))
        .unwrap();

    // No clock movement: rows are already annotated and published
    assert_eq!(returned[0].total, Some(100.0));
    assert_eq!(rows_rx.borrow()[0].total, Some(100.0));
    // ... while aggregates have not been recomputed yet
    assert_eq!(recalc.current_totals().final_total, 0.0);
}

#[tokio::test(start_paused = true)]
async fn spawn_seeds_totals_without_waiting() {
    let recalc = InvoiceRecalc::spawn(invoice_input(vec![invoice_item(1.0, 100.0)]));
    assert_eq!(recalc.current_totals().final_total, 110.0);
}

#[tokio::test(start_paused = true)]
async fn shutdown_cancels_pending_recomputation() {
    let mut recalc = InvoiceRecalc::spawn(InvoiceCalcInput::default());
    let totals = recalc.totals();

    recalc
        .update(invoice_input(vec![invoice_item(3.0, 100.0)]))
        .unwrap();
    settle().await;

    // Tear the session down while the quiet period is still pending
    recalc.shutdown().await;
    tokio::time::advance(Duration::from_millis(500)).await;
    settle().await;

    // The pending recomputation never fired
    assert_eq!(totals.borrow().final_total, 0.0);

    // And further updates are rejected
    assert!(matches!(
        recalc.update(InvoiceCalcInput::default()),
        Err(RecalcError::WorkerGone)
    ));
}

#[tokio::test(start_paused = true)]
async fn docket_adapter_applies_post_gst_deduction_with_gst_off() {
    let recalc = DocketRecalc::spawn(DocketCalcInput::default());
    let mut totals = recalc.totals();
    totals.mark_unchanged();

    recalc
        .update(DocketCalcInput {
            items: vec![docket_item(2.0, 1.0, 100.0)],
            post_gst_deductions: vec![Deduction {
                amount: Some(30.0),
                ..Deduction::new("bin hire")
            }],
            include_gst: false,
            ..Default::default()
        })
        .unwrap();
    settle().await;
    tokio::time::advance(Duration::from_millis(201)).await;
    settle().await;

    let published = totals.borrow_and_update().clone();
    assert_eq!(published.gst_amount, 0.0);
    assert_eq!(published.post_gst_deduction_total, 30.0);
    assert_eq!(published.final_total, 70.0);
}

#[tokio::test(start_paused = true)]
async fn docket_adapter_tracks_gst_percentage_changes() {
    let recalc = DocketRecalc::spawn(DocketCalcInput {
        items: vec![docket_item(3.0, 1.0, 100.0)],
        include_gst: true,
        gst_percentage: 10.0,
        ..Default::default()
    });
    let mut totals = recalc.totals();
    totals.mark_unchanged();
    assert_eq!(recalc.current_totals().gst_amount, 20.0);

    recalc
        .update(DocketCalcInput {
            items: vec![docket_item(3.0, 1.0, 100.0)],
            include_gst: true,
            gst_percentage: 12.5,
            ..Default::default()
        })
        .unwrap();
    settle().await;
    tokio::time::advance(Duration::from_millis(201)).await;
    settle().await;

    let published = totals.borrow_and_update().clone();
    assert_eq!(published.gst_amount, 25.0);
    assert_eq!(published.final_total, 225.0);
}
