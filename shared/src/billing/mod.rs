//! Billing document models
//!
//! Two document types share this module: invoices (quantity x price rows,
//! optional transport charges) and weight dockets (gross/tare/price rows).
//! Both carry pre-GST and post-GST deduction collections and produce the
//! totals shapes defined here.

pub mod docket;
pub mod format;
pub mod invoice;
pub mod types;

pub use docket::{Deduction, DocketCalculations, DocketLineItem, DocketTotals, MetalWeight};
pub use invoice::{InvoiceCalculations, InvoiceLineItem, InvoiceTotals, TransportItem};
pub use types::{Currency, DocketType, InvoiceType, Unit};

/// Generate an opaque key for a new row (line item, deduction, transport
/// charge). Keys are unique and stable across edits of the row.
pub fn new_row_key() -> String {
    uuid::Uuid::new_v4().to_string()
}
