//! Weight docket document model
//!
//! Docket rows are weighbridge entries: gross weight minus tare weight gives
//! the billable net weight, which is priced per unit. Net weights may be
//! negative (credit-style dockets) and are flagged visually downstream, not
//! clamped here.

use serde::{Deserialize, Serialize};

use super::types::Unit;

// ============================================================================
// Line Items
// ============================================================================

/// A single docket row as edited in the form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DocketLineItem {
    /// Opaque row key, unique and stable across edits
    pub key: String,
    /// Metal grade
    pub metal: String,
    /// Free-text row notes
    pub notes: String,
    /// Gross weight off the weighbridge
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gross: Option<f64>,
    /// Tare weight (vehicle / container)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tare: Option<f64>,
    /// Price per unit of net weight
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Derived net weight, `round2(gross - tare)`; may be negative
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net: Option<f64>,
    /// Derived row total, `round2(net * price)`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
    /// Measurement unit
    pub unit: Unit,
}

impl DocketLineItem {
    /// Create an empty row with a fresh key
    pub fn new() -> Self {
        Self {
            key: super::new_row_key(),
            ..Default::default()
        }
    }
}

// ============================================================================
// Deductions
// ============================================================================

/// A named deduction, kept in two independent collections per document:
/// pre-GST (subtracted before GST is computed) and post-GST (subtracted
/// from the final total)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Deduction {
    /// Opaque row key
    pub key: String,
    /// Deduction label, e.g. "Bin hire"
    pub label: String,
    /// Deducted amount, treated as zero while empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
}

impl Deduction {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            key: super::new_row_key(),
            label: label.into(),
            amount: None,
        }
    }
}

// ============================================================================
// Totals
// ============================================================================

/// Aggregate docket totals, all rounded to 2 decimal places
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DocketTotals {
    /// Sum of line-item totals
    pub items_total: f64,
    /// Sum of deductions applied before GST
    pub pre_gst_deduction_total: f64,
    /// Sum of deductions applied after GST (always summed, GST on or off)
    pub post_gst_deduction_total: f64,
    /// items - pre-GST deductions
    pub gross_total: f64,
    /// GST surcharge; computed on the gross total even when it is negative
    pub gst_amount: f64,
    /// gross + GST - post-GST deductions
    pub final_total: f64,
}

/// Full docket calculation result: annotated rows plus aggregates
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DocketCalculations {
    /// Line items with `net` and `total` populated, in input order
    pub items_with_totals: Vec<DocketLineItem>,
    /// Aggregate totals
    pub totals: DocketTotals,
}

/// One row of the net-weight summary: total net weight received per metal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetalWeight {
    /// Trimmed metal label; blank labels group under "Unspecified"
    pub metal: String,
    /// Summed net weight, rounded to 2 decimal places
    pub weight: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deduction_defaults_to_empty_amount() {
        let d = Deduction::new("Bin hire");
        assert_eq!(d.label, "Bin hire");
        assert!(d.amount.is_none());
        assert!(!d.key.is_empty());
    }

    #[test]
    fn test_docket_item_round_trip() {
        let item = DocketLineItem {
            key: "k1".into(),
            metal: "Aluminium".into(),
            notes: "clean extrusion".into(),
            gross: Some(2.48),
            tare: Some(0.6),
            price: Some(1850.0),
            net: None,
            total: None,
            unit: Unit::T,
        };
        let json = serde_json::to_string(&item).unwrap();
        let back: DocketLineItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn test_derived_fields_absent_until_calculated() {
        let json = serde_json::to_value(DocketLineItem::new()).unwrap();
        assert!(json.get("net").is_none());
        assert!(json.get("total").is_none());
    }
}
