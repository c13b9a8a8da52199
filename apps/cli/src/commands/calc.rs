//! # Calc Command
//!
//! One-shot calculation: fill a fresh form from flags and read the result.
//!
//! ```text
//! tipsplit calc --bill 100 --tip 15 --split 4
//!      │
//!      ▼
//! set_bill("100") → set_tip_percentage(15) → set_split(4) → summary
//!      │
//!      ▼
//! Total Per Person $28.75
//! ```
//!
//! Unlike the interactive form, an invalid bill here is an error: there is
//! no later keystroke that could fix it.

use tipsplit_core::validation::parse_bill_amount;
use tracing::debug;

use super::form;
use crate::error::{AppError, AppResult};
use crate::state::{AppConfig, BillForm, FormState, FormSummary};

/// Flags of `tipsplit calc`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalcInput {
    pub bill: String,
    pub tip_percentage: Option<i64>,
    pub slider_position: Option<f64>,
    pub split_count: Option<i64>,
}

/// Runs one calculation pass.
///
/// ## Errors
/// - bill text empty, unparseable, or negative
/// - tip percentage outside `[0, 100]` / slider position outside `[0, 1]`
/// - split count outside the configured range
/// - both a tip percentage and a slider position given
pub fn calculate(config: &AppConfig, input: &CalcInput) -> AppResult<FormSummary> {
    debug!(?input, "calc command");

    parse_bill_amount(&input.bill)?;

    if input.tip_percentage.is_some() && input.slider_position.is_some() {
        return Err(AppError::usage(
            "pass either a tip percentage or a slider position, not both",
        ));
    }

    let state = FormState::new(BillForm::new(config)?);
    let mut summary = form::set_bill(&state, &input.bill);

    if let Some(pct) = input.tip_percentage {
        summary = form::set_tip_percentage(&state, pct)?;
    }
    if let Some(position) = input.slider_position {
        summary = form::set_tip_position(&state, position)?;
    }
    if let Some(count) = input.split_count {
        summary = form::set_split(&state, count)?;
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn input(bill: &str) -> CalcInput {
        CalcInput {
            bill: bill.to_string(),
            ..CalcInput::default()
        }
    }

    #[test]
    fn test_reference_scenario() {
        let summary = calculate(
            &AppConfig::default(),
            &CalcInput {
                tip_percentage: Some(15),
                split_count: Some(4),
                ..input("100")
            },
        )
        .unwrap();
        assert_eq!(summary.total_per_person_display.as_deref(), Some("$28.75"));
        assert_eq!(summary.tip_display.as_deref(), Some("$15.00"));
    }

    #[test]
    fn test_bill_only() {
        let summary = calculate(&AppConfig::default(), &input("50")).unwrap();
        assert_eq!(summary.breakdown.unwrap().total_per_person, 50.0);
        assert_eq!(summary.split_count, 1);
    }

    #[test]
    fn test_slider_input() {
        let summary = calculate(
            &AppConfig::default(),
            &CalcInput {
                slider_position: Some(1.0 / 6.0),
                ..input("200")
            },
        )
        .unwrap();
        assert_eq!(summary.tip_percentage, 16);
        assert_eq!(summary.tip_display.as_deref(), Some("$32.00"));
    }

    #[test]
    fn test_invalid_bill_is_error() {
        let err = calculate(&AppConfig::default(), &input("lunch")).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_split_above_configured_max() {
        let config = AppConfig {
            split_max: 6,
            ..AppConfig::default()
        };
        let err = calculate(
            &config,
            &CalcInput {
                split_count: Some(7),
                ..input("60")
            },
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidSplitCount);
    }

    #[test]
    fn test_tip_and_slider_conflict() {
        let err = calculate(
            &AppConfig::default(),
            &CalcInput {
                tip_percentage: Some(10),
                slider_position: Some(0.5),
                ..input("10")
            },
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::UsageError);
    }
}
