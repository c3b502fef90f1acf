//! Shared types for the recycling billing stack
//!
//! Document models exchanged between the billing engine and the form /
//! summary layers: line items, deductions, transport charges, totals
//! results, and display formatting helpers.

pub mod billing;

// Re-exports
pub use serde::{Deserialize, Serialize};

// Billing re-exports (for convenient access)
pub use billing::{
    Currency, Deduction, DocketCalculations, DocketLineItem, DocketTotals, DocketType,
    InvoiceCalculations, InvoiceLineItem, InvoiceTotals, InvoiceType, MetalWeight, TransportItem,
    Unit,
};
