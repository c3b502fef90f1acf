//! Live Totals Example - a docket editing session against the engine
//!
//! Simulates a weighbridge operator filling in a docket: rows update
//! instantly on every edit, the summary totals settle once typing pauses.
//!
//! Run: cargo run -p billing-engine --example live_totals

use std::time::Duration;

use billing_engine::totals::docket;
use billing_engine::{DocketCalcInput, DocketRecalc, init_logger};
use shared::billing::format::format_amount;
use shared::billing::{Deduction, DocketLineItem};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger("debug", false)?;

    println!("=== Live Totals Example ===\n");

    let mut recalc = DocketRecalc::spawn(DocketCalcInput::default());
    let mut input = DocketCalcInput {
        include_gst: true,
        ..Default::default()
    };

    // === 1. Operator types the gross weight digit by digit ===
    println!("1. Typing gross weight (2 -> 2.4 -> 2.48)...");
    let mut row = DocketLineItem::new();
    row.metal = "Copper".into();
    row.tare = Some(0.6);
    row.price = Some(8400.0);

    for gross in [2.0, 2.4, 2.48] {
        row.gross = Some(gross);
        input.items = vec![row.clone()];
        let rows = recalc.update(input.clone())?;
        println!(
            "   gross={:<5} net={:<5} row total={}",
            gross,
            rows[0].net.unwrap_or_default(),
            format_amount(rows[0].total.unwrap_or_default())
        );
        // Keystrokes land well inside the quiet period
        tokio::time::sleep(Duration::from_millis(40)).await;
    }

    // Summary still shows the previous state until the input goes quiet
    println!(
        "   summary before quiet period: {}",
        format_amount(recalc.current_totals().final_total)
    );

    tokio::time::sleep(Duration::from_millis(250)).await;
    let totals = recalc.current_totals();
    println!(
        "   summary after quiet period:  gross {} / GST {} / final {}\n",
        format_amount(totals.gross_total),
        format_amount(totals.gst_amount),
        format_amount(totals.final_total)
    );

    // === 2. Add a pre-GST deduction ===
    println!("2. Adding a $25.00 bin hire deduction...");
    input.pre_gst_deductions = vec![Deduction {
        amount: Some(25.0),
        ..Deduction::new("Bin hire")
    }];
    recalc.update(input.clone())?;

    tokio::time::sleep(Duration::from_millis(250)).await;
    let totals = recalc.current_totals();
    println!(
        "   gross {} / GST {} / final {}\n",
        format_amount(totals.gross_total),
        format_amount(totals.gst_amount),
        format_amount(totals.final_total)
    );

    // === 3. Net weight summary ===
    println!("3. Net weights by metal:");
    let rows = docket::calculate(&input).items_with_totals;
    for entry in docket::net_weight_summary(&rows) {
        println!("   {:<12} {} t", entry.metal, entry.weight);
    }

    recalc.shutdown().await;
    println!("\nSession closed.");
    Ok(())
}
