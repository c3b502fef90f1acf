//! Invoice document model
//!
//! Line items are quantity x price rows; Container and Pickup invoices add
//! seal / container number / metal columns. Transport charges are a separate
//! per-container table that feeds its own aggregate.

use serde::{Deserialize, Serialize};

use super::types::Unit;

// ============================================================================
// Line Items
// ============================================================================

/// A single invoice row as edited in the form
///
/// Numeric fields are `None` while the form field is empty; the calculator
/// treats absent or non-finite values as zero rather than failing. `total`
/// is derived and only populated by the calculator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct InvoiceLineItem {
    /// Opaque row key, unique and stable across edits
    pub key: String,
    /// Free-text description of the goods
    pub description: String,
    /// Billed quantity in `unit`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    /// Price per unit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Measurement unit
    pub unit: Unit,
    /// Container seal number (Container/Pickup invoices)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seal: Option<String>,
    /// Container number (Container/Pickup invoices)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_number: Option<String>,
    /// Metal grade (Container/Pickup invoices)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metal: Option<String>,
    /// Derived row total, `round2(quantity * price)`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
}

impl InvoiceLineItem {
    /// Create an empty row with a fresh key
    pub fn new() -> Self {
        Self {
            key: super::new_row_key(),
            ..Default::default()
        }
    }
}

/// A transport charge row (number of containers x price per container)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TransportItem {
    /// Opaque row key
    pub key: String,
    /// Charge label, e.g. the carrier or route
    pub name: String,
    /// Number of containers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_of_ctr: Option<f64>,
    /// Price per container
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_ctr: Option<f64>,
}

impl TransportItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            key: super::new_row_key(),
            name: name.into(),
            ..Default::default()
        }
    }
}

// ============================================================================
// Totals
// ============================================================================

/// Aggregate invoice totals, all rounded to 2 decimal places
///
/// This is the shape the summary panel binds to; it is recomputed on demand
/// and never persisted on its own.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct InvoiceTotals {
    /// Sum of line-item totals
    pub items_total: f64,
    /// Sum of transport charges (zero when the transport table is hidden)
    pub transport_total: f64,
    /// Sum of deductions applied before GST
    pub pre_gst_deduction_total: f64,
    /// Sum of deductions applied after GST (zero when GST is disabled)
    pub post_gst_deduction_total: f64,
    /// items + transport - pre-GST deductions
    pub gross_total: f64,
    /// GST surcharge on the gross total
    pub gst_amount: f64,
    /// gross + GST - post-GST deductions
    pub final_total: f64,
}

/// Full invoice calculation result: annotated rows plus aggregates
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct InvoiceCalculations {
    /// Line items with `total` populated, in input order
    pub items_with_totals: Vec<InvoiceLineItem>,
    /// Aggregate totals
    pub totals: InvoiceTotals,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_items_get_distinct_keys() {
        let a = InvoiceLineItem::new();
        let b = InvoiceLineItem::new();
        assert!(!a.key.is_empty());
        assert_ne!(a.key, b.key);
    }

    #[test]
    fn test_empty_numeric_fields_not_serialized() {
        let item = InvoiceLineItem::new();
        let json = serde_json::to_value(&item).unwrap();
        assert!(json.get("quantity").is_none());
        assert!(json.get("total").is_none());
        assert_eq!(json["unit"], "t");
    }

    #[test]
    fn test_line_item_round_trip() {
        let item = InvoiceLineItem {
            key: "k1".into(),
            description: "Copper bright".into(),
            quantity: Some(1.25),
            price: Some(8400.0),
            unit: Unit::T,
            seal: Some("S-1182".into()),
            container_number: Some("TCNU1234567".into()),
            metal: Some("Cu".into()),
            total: None,
        };
        let json = serde_json::to_string(&item).unwrap();
        let back: InvoiceLineItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }
}
