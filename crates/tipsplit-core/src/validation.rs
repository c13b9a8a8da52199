//! # Validation Module
//!
//! Turns raw text from the bill input field into a `BillAmount`.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Layer 1: Input field                                                   │
//! │  └── is_valid_bill_text(): gates whether results are shown at all       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: parse_bill_amount() ← THIS MODULE                             │
//! │  └── trims, strips a leading currency symbol, parses, range-checks      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: BillAmount::new()                                             │
//! │  └── finite and >= 0, enforced for every caller                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{CoreResult, ValidationError};
use crate::types::BillAmount;

const BILL_FIELD: &str = "bill amount";

/// Parses user-entered bill text.
///
/// ## Rules
/// - Surrounding whitespace is ignored
/// - One leading `$` is allowed (`"$42.50"`)
/// - Must parse as a plain decimal number
/// - Must be finite and not negative
///
/// ## Example
/// ```rust
/// use tipsplit_core::validation::parse_bill_amount;
///
/// assert_eq!(parse_bill_amount(" 42.50 ").unwrap().value(), 42.5);
/// assert_eq!(parse_bill_amount("$100").unwrap().value(), 100.0);
/// assert!(parse_bill_amount("").is_err());
/// assert!(parse_bill_amount("abc").is_err());
/// assert!(parse_bill_amount("-5").is_err());
/// ```
pub fn parse_bill_amount(text: &str) -> CoreResult<BillAmount> {
    let text = text.trim();
    let text = text.strip_prefix('$').unwrap_or(text).trim_start();

    if text.is_empty() {
        return Err(ValidationError::Required {
            field: BILL_FIELD.to_string(),
        }
        .into());
    }

    // f64::from_str also accepts "inf" and "NaN"; only digits, one dot
    // and a leading sign are allowed here
    if !text
        .chars()
        .all(|c| c.is_ascii_digit() || c == '.' || c == '-' || c == '+')
    {
        return Err(ValidationError::InvalidFormat {
            field: BILL_FIELD.to_string(),
            reason: "must be a decimal number".to_string(),
        }
        .into());
    }

    let value: f64 = text.parse().map_err(|_| ValidationError::InvalidFormat {
        field: BILL_FIELD.to_string(),
        reason: "must be a decimal number".to_string(),
    })?;

    if value < 0.0 {
        return Err(ValidationError::MustBeNonNegative {
            field: BILL_FIELD.to_string(),
        }
        .into());
    }

    BillAmount::new(value)
}

/// Returns true when the bill text would produce results.
///
/// The form shows the split and tip controls only while this holds.
pub fn is_valid_bill_text(text: &str) -> bool {
    parse_bill_amount(text).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn test_parse_valid() {
        assert_eq!(parse_bill_amount("0").unwrap().value(), 0.0);
        assert_eq!(parse_bill_amount("12").unwrap().value(), 12.0);
        assert_eq!(parse_bill_amount("12.34").unwrap().value(), 12.34);
        assert_eq!(parse_bill_amount(".5").unwrap().value(), 0.5);
        assert_eq!(parse_bill_amount("\t$ 7.25\n").unwrap().value(), 7.25);
    }

    #[test]
    fn test_parse_empty_is_required() {
        for text in ["", "   ", "$"] {
            assert!(matches!(
                parse_bill_amount(text),
                Err(CoreError::Validation(ValidationError::Required { .. }))
            ));
        }
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for text in ["abc", "12.3.4", "1e3", "inf", "NaN", "12,50", "--1"] {
            assert!(
                matches!(
                    parse_bill_amount(text),
                    Err(CoreError::Validation(ValidationError::InvalidFormat { .. }))
                ),
                "expected format error for {text:?}"
            );
        }
    }

    #[test]
    fn test_parse_rejects_negative() {
        assert!(matches!(
            parse_bill_amount("-0.01"),
            Err(CoreError::Validation(ValidationError::MustBeNonNegative { .. }))
        ));
    }

    #[test]
    fn test_is_valid_bill_text() {
        assert!(is_valid_bill_text("45"));
        assert!(!is_valid_bill_text(""));
        assert!(!is_valid_bill_text("forty"));
    }
}
