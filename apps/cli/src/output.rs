//! # Output
//!
//! Renders a `FormSummary` for the terminal.
//!
//! ## Text Layout
//! ```text
//! Total Per Person
//! $28.75
//!   Bill   100
//!   Split  4 (1-100)
//!   Tip    15% = $15.00
//! ```
//!
//! While the bill is invalid only the inputs are shown, no amounts.

use std::fmt::Write as _;

use crate::error::{AppError, AppResult};
use crate::state::FormSummary;

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Renders a summary in the requested format.
pub fn render_summary(summary: &FormSummary, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(summary)?),
        OutputFormat::Text => Ok(render_text(summary)),
    }
}

/// Renders an error in the requested format.
pub fn render_error(err: &AppError, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => serde_json::to_string(err)
            .unwrap_or_else(|_| format!("{{\"message\":{:?}}}", err.message)),
        OutputFormat::Text => format!("error: {}", err.message),
    }
}

fn render_text(summary: &FormSummary) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail
    match &summary.total_per_person_display {
        Some(total) => {
            let _ = writeln!(out, "Total Per Person");
            let _ = writeln!(out, "{}", total);
        }
        None => {
            let _ = writeln!(out, "Enter a bill amount to see the total per person");
        }
    }

    let bill = if summary.bill_text.trim().is_empty() {
        "-"
    } else {
        summary.bill_text.trim()
    };
    let _ = writeln!(out, "  Bill   {}", bill);
    let _ = writeln!(
        out,
        "  Split  {} ({}-{})",
        summary.split_count, summary.split_min, summary.split_max
    );
    match &summary.tip_display {
        Some(tip) => {
            let _ = write!(out, "  Tip    {}% = {}", summary.tip_percentage, tip);
        }
        None => {
            let _ = write!(out, "  Tip    {}%", summary.tip_percentage);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{AppConfig, BillForm};

    fn summary(bill: &str, tip: i64, split: i64) -> FormSummary {
        let mut form = BillForm::new(&AppConfig::default()).unwrap();
        form.set_bill_text(bill);
        form.set_tip_percentage(tip).unwrap();
        form.set_split_count(split).unwrap();
        form.summary()
    }

    #[test]
    fn test_text_with_results() {
        let text = render_summary(&summary("100", 15, 4), OutputFormat::Text).unwrap();
        assert_eq!(
            text,
            "Total Per Person\n$28.75\n  Bill   100\n  Split  4 (1-100)\n  Tip    15% = $15.00"
        );
    }

    #[test]
    fn test_text_neutral() {
        let text = render_summary(&summary("", 20, 2), OutputFormat::Text).unwrap();
        assert!(text.starts_with("Enter a bill amount"));
        assert!(text.contains("  Bill   -\n"));
        assert!(text.ends_with("  Tip    20%"));
        assert!(!text.contains('$'));
    }

    #[test]
    fn test_json() {
        let json = render_summary(&summary("50", 0, 1), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["isValidBill"], true);
        assert_eq!(value["totalPerPersonDisplay"], "$50.00");
        assert_eq!(value["breakdown"]["totalPerPerson"], 50.0);
    }

    #[test]
    fn test_render_error() {
        let err = AppError::usage("unknown command 'x'");
        assert_eq!(render_error(&err, OutputFormat::Text), "error: unknown command 'x'");
        let json: serde_json::Value =
            serde_json::from_str(&render_error(&err, OutputFormat::Json)).unwrap();
        assert_eq!(json["code"], "USAGE_ERROR");
    }
}
