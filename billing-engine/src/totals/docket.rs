//! Docket totals calculator
//!
//! Docket rows resolve net weight first (`gross - tare`), then price the
//! net. Unlike invoices the GST percentage is configurable per docket, GST
//! is computed on the gross total regardless of sign (credit-style dockets
//! with negative nets are legitimate), and post-GST deductions always apply
//! whether or not GST is enabled.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::billing::{
    Deduction, DocketCalculations, DocketLineItem, DocketTotals, MetalWeight,
};

use super::money::{dec_or_zero, round_dec, sum_deductions, to_decimal, to_f64};

/// Default GST percentage offered by the docket form
pub const DEFAULT_GST_PERCENTAGE: f64 = 10.0;

/// Live calculator input, mirroring the docket form state
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DocketCalcInput {
    pub items: Vec<DocketLineItem>,
    pub pre_gst_deductions: Vec<Deduction>,
    pub post_gst_deductions: Vec<Deduction>,
    pub include_gst: bool,
    /// GST percentage, e.g. 10.0 for 10%; non-finite values count as zero
    pub gst_percentage: f64,
}

impl Default for DocketCalcInput {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            pre_gst_deductions: Vec::new(),
            post_gst_deductions: Vec::new(),
            // Dockets start GST-free; the form opts in per customer
            include_gst: false,
            gst_percentage: DEFAULT_GST_PERCENTAGE,
        }
    }
}

/// Annotate each row with `net = round2(gross - tare)` and
/// `total = round2(net * price)`
///
/// Net weights may be negative; they are flagged visually downstream, not
/// clamped here.
pub fn calculate_item_totals(items: &[DocketLineItem]) -> Vec<DocketLineItem> {
    items
        .iter()
        .map(|item| {
            let net = round_dec(dec_or_zero(item.gross) - dec_or_zero(item.tare));
            let total = round_dec(net * dec_or_zero(item.price));
            DocketLineItem {
                net: Some(to_f64(net)),
                total: Some(to_f64(total)),
                ..item.clone()
            }
        })
        .collect()
}

/// Run the full cascade and return rows plus aggregates
pub fn calculate(input: &DocketCalcInput) -> DocketCalculations {
    // 1. Row nets and totals
    let items_with_totals = calculate_item_totals(&input.items);

    // 2. Items subtotal
    let items_total: Decimal = items_with_totals.iter().map(|i| dec_or_zero(i.total)).sum();
    let items_total = round_dec(items_total);

    // 3. Pre-GST deductions and the gross total
    let pre_gst_deduction_total = round_dec(sum_deductions(&input.pre_gst_deductions));
    let gross_total = round_dec(items_total - pre_gst_deduction_total);

    // 4. GST at the configured rate, computed even on a negative gross
    let gst_rate = to_decimal(input.gst_percentage) / Decimal::ONE_HUNDRED;
    let gst_amount = if input.include_gst {
        round_dec(gross_total * gst_rate)
    } else {
        Decimal::ZERO
    };

    // 5. Post-GST deductions apply unconditionally - reference behavior for
    //    dockets, distinct from invoices which gate them on include_gst.
    let post_gst_deduction_total = round_dec(sum_deductions(&input.post_gst_deductions));

    // 6. Final payable total
    let final_total = round_dec(gross_total + gst_amount - post_gst_deduction_total);

    DocketCalculations {
        items_with_totals,
        totals: DocketTotals {
            items_total: to_f64(items_total),
            pre_gst_deduction_total: to_f64(pre_gst_deduction_total),
            post_gst_deduction_total: to_f64(post_gst_deduction_total),
            gross_total: to_f64(gross_total),
            gst_amount: to_f64(gst_amount),
            final_total: to_f64(final_total),
        },
    }
}

/// Total net weight received per metal, for the docket weight summary
///
/// Rows group by trimmed metal label in first-appearance order. Rows with
/// weight but no metal label group under "Unspecified"; rows with neither
/// weight nor label are skipped.
pub fn net_weight_summary(items: &[DocketLineItem]) -> Vec<MetalWeight> {
    let mut groups: Vec<(String, Decimal)> = Vec::new();

    for item in items {
        let has_weight = item.gross.unwrap_or(0.0) > 0.0 || item.tare.unwrap_or(0.0) > 0.0;
        let label = item.metal.trim();
        if !has_weight && label.is_empty() {
            continue;
        }

        let label = if label.is_empty() {
            "Unspecified".to_string()
        } else {
            label.to_string()
        };
        let net = dec_or_zero(item.net);

        match groups.iter_mut().find(|(metal, _)| *metal == label) {
            Some((_, weight)) => *weight += net,
            None => groups.push((label, net)),
        }
    }

    groups
        .into_iter()
        .map(|(metal, weight)| MetalWeight {
            metal,
            weight: to_f64(weight),
        })
        .collect()
}
