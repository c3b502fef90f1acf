//! Invoice totals calculator
//!
//! Derives per-row totals and the cascading aggregates: items and transport
//! feed the gross total, pre-GST deductions come off before GST is applied,
//! post-GST deductions come off the final total.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::billing::{
    Deduction, InvoiceCalculations, InvoiceLineItem, InvoiceTotals, TransportItem,
};

use super::money::{dec_or_zero, round_dec, sum_deductions, to_f64};

/// Fixed GST rate for invoices (10%).
///
/// Dockets take a configurable percentage instead; the two configuration
/// surfaces are kept separate per document type.
const GST_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

/// Live calculator input, mirroring the invoice form state
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InvoiceCalcInput {
    pub items: Vec<InvoiceLineItem>,
    pub transport_items: Vec<TransportItem>,
    pub pre_gst_deductions: Vec<Deduction>,
    pub post_gst_deductions: Vec<Deduction>,
    pub include_gst: bool,
    /// Transport charges only count while the transport table is shown
    pub show_transport: bool,
}

impl Default for InvoiceCalcInput {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            transport_items: Vec::new(),
            pre_gst_deductions: Vec::new(),
            post_gst_deductions: Vec::new(),
            include_gst: true,
            show_transport: true,
        }
    }
}

/// Annotate each row with `total = round2(quantity * price)`
///
/// Pure and idempotent; the input rows are not mutated. Absent or
/// non-finite factors count as zero.
pub fn calculate_item_totals(items: &[InvoiceLineItem]) -> Vec<InvoiceLineItem> {
    items
        .iter()
        .map(|item| {
            let total = round_dec(dec_or_zero(item.quantity) * dec_or_zero(item.price));
            InvoiceLineItem {
                total: Some(to_f64(total)),
                ..item.clone()
            }
        })
        .collect()
}

/// Run the full cascade and return rows plus aggregates
pub fn calculate(input: &InvoiceCalcInput) -> InvoiceCalculations {
    // 1. Row totals
    let items_with_totals = calculate_item_totals(&input.items);

    // 2. Items subtotal
    let items_total: Decimal = items_with_totals.iter().map(|i| dec_or_zero(i.total)).sum();
    let items_total = round_dec(items_total);

    // 3. Transport subtotal (zeroed while the transport table is hidden)
    let transport_total = if input.show_transport {
        let sum: Decimal = input
            .transport_items
            .iter()
            .map(|t| round_dec(dec_or_zero(t.num_of_ctr) * dec_or_zero(t.price_per_ctr)))
            .sum();
        round_dec(sum)
    } else {
        Decimal::ZERO
    };

    // 4. Pre-GST deductions and the gross total
    let pre_gst_deduction_total = round_dec(sum_deductions(&input.pre_gst_deductions));
    let gross_total = round_dec(items_total + transport_total - pre_gst_deduction_total);

    // 5. GST at the fixed rate
    let gst_amount = if input.include_gst {
        round_dec(gross_total * GST_RATE)
    } else {
        Decimal::ZERO
    };

    // 6. Post-GST deductions are ignored entirely while GST is off -
    //    reference behavior for invoices, distinct from dockets which
    //    always sum them.
    let post_gst_deduction_total = if input.include_gst {
        round_dec(sum_deductions(&input.post_gst_deductions))
    } else {
        Decimal::ZERO
    };

    // 7. Final payable total
    let final_total = round_dec(gross_total + gst_amount - post_gst_deduction_total);

    InvoiceCalculations {
        items_with_totals,
        totals: InvoiceTotals {
            items_total: to_f64(items_total),
            transport_total: to_f64(transport_total),
            pre_gst_deduction_total: to_f64(pre_gst_deduction_total),
            post_gst_deduction_total: to_f64(post_gst_deduction_total),
            gross_total: to_f64(gross_total),
            gst_amount: to_f64(gst_amount),
            final_total: to_f64(final_total),
        },
    }
}
