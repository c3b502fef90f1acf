//! Money calculation utilities using rust_decimal for precision
//!
//! Form state carries numeric fields as `Option<f64>` (empty while the user
//! has not typed anything). All arithmetic is done with `Decimal`
//! internally, then converted back to `f64` for the result shapes.

use rust_decimal::prelude::*;
use shared::billing::Deduction;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
///
/// Non-finite input (NaN, infinities) silently degrades to zero. Bad input
/// must understate a total, never abort a calculation.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert an optional form field to Decimal; absent counts as zero
#[inline]
pub fn dec_or_zero(value: Option<f64>) -> Decimal {
    value.map(to_decimal).unwrap_or(Decimal::ZERO)
}

/// Convert Decimal back to f64 for the result shapes, rounded to 2 decimal
/// places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Round to currency precision while staying in Decimal
#[inline]
pub fn round_dec(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Sum a deduction collection; empty amounts count as zero
pub fn sum_deductions(deductions: &[Deduction]) -> Decimal {
    deductions.iter().map(|d| dec_or_zero(d.amount)).sum()
}
