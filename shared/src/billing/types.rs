//! Shared enums for billing documents

use serde::{Deserialize, Serialize};

// ============================================================================
// Units
// ============================================================================

/// Measurement unit attached to a line item
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Tonnes (the default for scrap metal)
    #[default]
    T,
    Kg,
    Bin,
    Cnt,
    Num,
    Pcs,
    Pal,
}

impl Unit {
    /// Display label as shown in unit selectors
    pub fn label(&self) -> &'static str {
        match self {
            Unit::T => "t",
            Unit::Kg => "kg",
            Unit::Bin => "bin",
            Unit::Cnt => "CNT",
            Unit::Num => "num",
            Unit::Pcs => "pcs",
            Unit::Pal => "pal",
        }
    }
}

// ============================================================================
// Currency
// ============================================================================

/// Invoice currency (display only, no conversion)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Aud,
    Usd,
    Eur,
    Gbp,
    Jpy,
    Cny,
    Nzd,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Aud => "AUD",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Jpy => "JPY",
            Currency::Cny => "CNY",
            Currency::Nzd => "NZD",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Eur => "€",
            Currency::Gbp => "£",
            Currency::Jpy | Currency::Cny => "¥",
            _ => "$",
        }
    }

    /// Display string for selectors, e.g. "AUD$"
    pub fn label(&self) -> String {
        format!("{}{}", self.code(), self.symbol())
    }
}

// ============================================================================
// Document types
// ============================================================================

/// Invoice variant - governs which optional line-item columns are shown
/// (seal / container number / metal)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum InvoiceType {
    #[default]
    Standard,
    Container,
    Pickup,
}

impl InvoiceType {
    /// Container and Pickup invoices carry seal / container number / metal
    /// columns on their line items
    pub fn has_container_fields(&self) -> bool {
        matches!(self, InvoiceType::Container | InvoiceType::Pickup)
    }
}

/// Docket variant
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum DocketType {
    #[default]
    Customer,
    Company,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Unit::T).unwrap(), r#""t""#);
        assert_eq!(serde_json::to_string(&Unit::Pal).unwrap(), r#""pal""#);
        let unit: Unit = serde_json::from_str(r#""kg""#).unwrap();
        assert_eq!(unit, Unit::Kg);
    }

    #[test]
    fn test_currency_labels() {
        assert_eq!(Currency::Aud.label(), "AUD$");
        assert_eq!(Currency::Eur.label(), "EUR€");
        assert_eq!(serde_json::to_string(&Currency::Nzd).unwrap(), r#""NZD""#);
    }

    #[test]
    fn test_invoice_type_container_fields() {
        assert!(!InvoiceType::Standard.has_container_fields());
        assert!(InvoiceType::Container.has_container_fields());
        assert!(InvoiceType::Pickup.has_container_fields());
    }
}
