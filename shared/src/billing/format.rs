//! Amount display formatting
//!
//! Formatting for monetary fields as shown in the forms and summaries:
//! thousands-separated, always two decimal places. Parsing strips the
//! grouping separators back out so form state holds plain numerals.

use rust_decimal::prelude::*;

/// Format an amount for display: `1234567.891` -> `"1,234,567.89"`.
///
/// Non-finite values render as an empty string, matching the blank cell the
/// forms show for an empty field.
pub fn format_amount(value: f64) -> String {
    let Some(dec) = Decimal::from_f64(value) else {
        return String::new();
    };
    let dec = dec.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{:.2}", dec);

    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    // "{:.2}" always yields a fractional part
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, "00"));

    format!("{}{}.{}", sign, group_thousands(int_part), frac_part)
}

/// Strip thousands separators from user input: `"1,234.5"` -> `"1234.5"`
pub fn strip_grouping(input: &str) -> String {
    input.replace(',', "")
}

/// Parse a displayed amount back to a number. Empty input is `None`;
/// anything unparseable after separator stripping is also `None`.
pub fn parse_amount(input: &str) -> Option<f64> {
    let cleaned = strip_grouping(input.trim());
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Validate a keystroke-level partial amount: digits with at most one dot
/// and at most `precision` fractional digits. A lone `-` or the empty
/// string is accepted so the user can keep typing.
pub fn is_valid_amount_input(input: &str, precision: usize) -> bool {
    if input.is_empty() || input == "-" {
        return true;
    }
    let (int_part, frac_part) = match input.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (input, None),
    };
    if !int_part.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    match frac_part {
        None => true,
        Some(f) => f.len() <= precision && f.chars().all(|c| c.is_ascii_digit()),
    }
}

/// Insert `,` every three digits from the right
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_grouping() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(1234.5), "1,234.50");
        assert_eq!(format_amount(1234567.891), "1,234,567.89");
        assert_eq!(format_amount(-98765.4), "-98,765.40");
    }

    #[test]
    fn test_format_amount_rounds_half_up() {
        assert_eq!(format_amount(10.005), "10.01");
        assert_eq!(format_amount(10.004), "10.00");
    }

    #[test]
    fn test_format_amount_non_finite_is_blank() {
        assert_eq!(format_amount(f64::NAN), "");
        assert_eq!(format_amount(f64::INFINITY), "");
    }

    #[test]
    fn test_parse_amount_strips_grouping() {
        assert_eq!(parse_amount("1,234.50"), Some(1234.5));
        assert_eq!(parse_amount("  42 "), Some(42.0));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("abc"), None);
    }

    #[test]
    fn test_is_valid_amount_input() {
        assert!(is_valid_amount_input("", 2));
        assert!(is_valid_amount_input("-", 2));
        assert!(is_valid_amount_input("123", 2));
        assert!(is_valid_amount_input("123.", 2));
        assert!(is_valid_amount_input("123.45", 2));
        assert!(!is_valid_amount_input("123.456", 2));
        assert!(!is_valid_amount_input("12a", 2));
        assert!(!is_valid_amount_input("1.2.3", 2));
        // weights allow three fractional digits
        assert!(is_valid_amount_input("2.485", 3));
    }
}
