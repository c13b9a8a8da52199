//! # Bill Form State
//!
//! The three pieces of observable state behind the bill form, and the
//! recompute that runs after every change.
//!
//! ## Form Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  User Action            Command                 Form State Change       │
//! │  ───────────            ───────                 ─────────────────       │
//! │                                                                         │
//! │  Type bill ────────────► set_bill() ──────────► bill_text = "100"      │
//! │                                                                         │
//! │  Drag slider ──────────► set_tip_position() ──► slider, tip = 50%      │
//! │                                                                         │
//! │  Press "+" ────────────► increment_split() ───► split = min(n+1, max)  │
//! │                                                                         │
//! │  Press "-" ────────────► decrement_split() ───► split = max(n-1, 1)    │
//! │                                                                         │
//! │  After every change: summary() recomputes tip and total per person.    │
//! │  Invalid bill text ⇒ no results (neutral display).                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};
use tipsplit_core::validation::parse_bill_amount;
use tipsplit_core::{
    calculate_breakdown, format_amount, BillAmount, CoreResult, SliderPosition, SplitCount,
    SplitRange, TipBreakdown, TipPercentage,
};

use super::config::{AppConfig, ConfigError};

/// Form inputs as the user sees them.
#[derive(Debug, Clone)]
pub struct BillForm {
    bill_text: String,
    split_count: SplitCount,
    slider: SliderPosition,
    tip: TipPercentage,
    range: SplitRange,
    slider_intervals: u32,
    currency_symbol: String,
}

impl BillForm {
    /// Creates an empty form: no bill, one payer, slider at 0%.
    pub fn new(config: &AppConfig) -> Result<Self, ConfigError> {
        let range = config.split_range()?;
        Ok(BillForm {
            bill_text: String::new(),
            split_count: range.clamp(range.min() as i64),
            slider: SliderPosition::start(),
            tip: TipPercentage::zero(),
            range,
            slider_intervals: config.slider_intervals,
            currency_symbol: config.currency_symbol.clone(),
        })
    }

    pub fn bill_text(&self) -> &str {
        &self.bill_text
    }

    /// The parsed bill, if the text is currently valid.
    pub fn bill(&self) -> Option<BillAmount> {
        parse_bill_amount(&self.bill_text).ok()
    }

    /// Controls the visibility of results.
    pub fn is_valid_bill(&self) -> bool {
        self.bill().is_some()
    }

    pub fn split_count(&self) -> SplitCount {
        self.split_count
    }

    pub fn tip_percentage(&self) -> TipPercentage {
        self.tip
    }

    pub fn slider(&self) -> SliderPosition {
        self.slider
    }

    pub fn split_range(&self) -> SplitRange {
        self.range
    }

    /// Replaces the bill text. Any text is accepted; validity only decides
    /// whether results are shown.
    pub fn set_bill_text(&mut self, text: impl Into<String>) {
        self.bill_text = text.into();
    }

    /// Moves the tip slider, snapping to the configured stops.
    pub fn move_slider(&mut self, position: f64) -> CoreResult<TipPercentage> {
        let snapped = SliderPosition::new(position)?.snap(self.slider_intervals);
        self.slider = snapped;
        self.tip = snapped.tip_percentage();
        Ok(self.tip)
    }

    /// Sets the tip percentage directly and parks the slider at the
    /// matching position.
    pub fn set_tip_percentage(&mut self, pct: i64) -> CoreResult<TipPercentage> {
        let tip = TipPercentage::new(pct)?;
        self.slider = SliderPosition::new(tip.as_fraction())?;
        self.tip = tip;
        Ok(tip)
    }

    pub fn increment_split(&mut self) -> SplitCount {
        self.split_count = self.split_count.increment(self.range);
        self.split_count
    }

    pub fn decrement_split(&mut self) -> SplitCount {
        self.split_count = self.split_count.decrement(self.range);
        self.split_count
    }

    /// Sets the split count, which must be inside the configured range.
    pub fn set_split_count(&mut self, count: i64) -> CoreResult<SplitCount> {
        self.split_count = SplitCount::within(count, self.range)?;
        Ok(self.split_count)
    }

    /// Back to the initial empty form, keeping configuration.
    pub fn reset(&mut self) {
        self.bill_text.clear();
        self.split_count = self.range.clamp(self.range.min() as i64);
        self.slider = SliderPosition::start();
        self.tip = TipPercentage::zero();
    }

    /// Runs the calculators over the current inputs.
    pub fn summary(&self) -> FormSummary {
        let breakdown = self
            .bill()
            .map(|bill| calculate_breakdown(bill, self.split_count, self.tip));

        let format = |amount: f64| format_amount(amount, &self.currency_symbol);

        FormSummary {
            bill_text: self.bill_text.clone(),
            is_valid_bill: breakdown.is_some(),
            split_count: self.split_count.value(),
            split_min: self.range.min(),
            split_max: self.range.max(),
            slider_position: self.slider.value(),
            tip_percentage: self.tip.value(),
            tip_display: breakdown.map(|b| format(b.tip_amount)),
            total_per_person_display: breakdown.map(|b| format(b.total_per_person)),
            breakdown,
        }
    }
}

/// Snapshot of the form after a recompute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSummary {
    pub bill_text: String,
    pub is_valid_bill: bool,
    pub split_count: u32,
    pub split_min: u32,
    pub split_max: u32,
    pub slider_position: f64,
    pub tip_percentage: u32,
    /// Raw results; `None` while the bill text is invalid
    pub breakdown: Option<TipBreakdown>,
    pub tip_display: Option<String>,
    pub total_per_person_display: Option<String>,
}

/// Shared handle to the bill form.
///
/// Commands lock the form for the duration of one change plus recompute.
#[derive(Debug, Clone)]
pub struct FormState {
    form: Arc<Mutex<BillForm>>,
}

impl FormState {
    pub fn new(form: BillForm) -> Self {
        FormState {
            form: Arc::new(Mutex::new(form)),
        }
    }

    /// Executes a function with read access to the form.
    pub fn with_form<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&BillForm) -> R,
    {
        // Form updates cannot leave it half-written, so a poisoned lock is
        // still safe to read
        let form = self.form.lock().unwrap_or_else(PoisonError::into_inner);
        f(&form)
    }

    /// Executes a function with write access to the form.
    pub fn with_form_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut BillForm) -> R,
    {
        let mut form = self.form.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> BillForm {
        BillForm::new(&AppConfig::default()).unwrap()
    }

    #[test]
    fn test_new_form_is_neutral() {
        let summary = form().summary();
        assert!(!summary.is_valid_bill);
        assert_eq!(summary.split_count, 1);
        assert_eq!(summary.tip_percentage, 0);
        assert!(summary.breakdown.is_none());
        assert!(summary.total_per_person_display.is_none());
    }

    #[test]
    fn test_recompute_after_each_change() {
        let mut form = form();
        form.set_bill_text("100");
        assert_eq!(form.summary().total_per_person_display.as_deref(), Some("$100.00"));

        form.set_tip_percentage(15).unwrap();
        for _ in 0..3 {
            form.increment_split();
        }
        let summary = form.summary();
        assert_eq!(summary.split_count, 4);
        assert_eq!(summary.tip_display.as_deref(), Some("$15.00"));
        assert_eq!(summary.total_per_person_display.as_deref(), Some("$28.75"));
        assert_eq!(summary.breakdown.unwrap().total_per_person, 28.75);
    }

    #[test]
    fn test_invalid_bill_hides_results_but_keeps_inputs() {
        let mut form = form();
        form.set_bill_text("80");
        form.increment_split();
        form.set_bill_text("eighty");

        let summary = form.summary();
        assert!(!summary.is_valid_bill);
        assert!(summary.tip_display.is_none());
        assert_eq!(summary.split_count, 2);
    }

    #[test]
    fn test_slider_snaps_and_truncates() {
        let mut form = form();
        assert_eq!(form.move_slider(0.2).unwrap().value(), 16);
        assert_eq!(form.slider().value(), 1.0 / 6.0);
        assert_eq!(form.move_slider(0.48).unwrap().value(), 50);
        assert_eq!(form.move_slider(1.0).unwrap().value(), 100);
        assert!(form.move_slider(1.5).is_err());
        assert_eq!(form.tip_percentage().value(), 100);
    }

    #[test]
    fn test_continuous_slider() {
        let config = AppConfig {
            slider_intervals: 0,
            ..AppConfig::default()
        };
        let mut form = BillForm::new(&config).unwrap();
        assert_eq!(form.move_slider(0.25).unwrap().value(), 25);
    }

    #[test]
    fn test_set_tip_percentage_keeps_exact_value() {
        let mut form = form();
        // 0.29 * 100 truncates to 28; a typed percentage must stay 29
        assert_eq!(form.set_tip_percentage(29).unwrap().value(), 29);
        assert_eq!(form.summary().tip_percentage, 29);
        assert!(form.set_tip_percentage(120).is_err());
        assert_eq!(form.tip_percentage().value(), 29);
    }

    #[test]
    fn test_split_clamps() {
        let config = AppConfig {
            split_max: 3,
            ..AppConfig::default()
        };
        let mut form = BillForm::new(&config).unwrap();
        form.decrement_split();
        assert_eq!(form.split_count().value(), 1);
        for _ in 0..10 {
            form.increment_split();
        }
        assert_eq!(form.split_count().value(), 3);
        assert!(form.set_split_count(4).is_err());
        assert!(form.set_split_count(0).is_err());
        assert_eq!(form.set_split_count(2).unwrap().value(), 2);
    }

    #[test]
    fn test_reset() {
        let mut form = form();
        form.set_bill_text("55");
        form.set_tip_percentage(20).unwrap();
        form.increment_split();
        form.reset();

        let summary = form.summary();
        assert_eq!(summary.bill_text, "");
        assert_eq!(summary.split_count, 1);
        assert_eq!(summary.tip_percentage, 0);
    }

    #[test]
    fn test_huge_bill_displays_true_amount() {
        let mut form = form();
        form.set_bill_text("100000000000000000000");
        let summary = form.summary();
        assert!(summary.is_valid_bill);
        assert_eq!(
            summary.total_per_person_display.as_deref(),
            Some("$100000000000000000000.00")
        );
        assert_eq!(summary.tip_display.as_deref(), Some("$0.00"));
    }

    #[test]
    fn test_currency_symbol() {
        let config = AppConfig {
            currency_symbol: "€".to_string(),
            ..AppConfig::default()
        };
        let mut form = BillForm::new(&config).unwrap();
        form.set_bill_text("10");
        assert_eq!(form.summary().total_per_person_display.as_deref(), Some("€10.00"));
    }

    #[test]
    fn test_form_state_shared() {
        let state = FormState::new(form());
        let other = state.clone();
        other.with_form_mut(|f| f.set_bill_text("12"));
        assert!(state.with_form(|f| f.is_valid_bill()));
    }
}
