//! Totals Calculation Module
//!
//! Pure calculators for both billing document types. Calculators never
//! mutate their inputs, never fail, and are idempotent: malformed numeric
//! input degrades to zero instead of blocking the user mid-edit.

pub mod docket;
pub mod invoice;
pub mod money;

pub use docket::DocketCalcInput;
pub use invoice::InvoiceCalcInput;
