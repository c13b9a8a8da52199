//! # Form Commands
//!
//! Input events on the bill form.
//!
//! ## Form Lifecycle
//! ```text
//! ┌──────────┐  set_bill (valid)   ┌──────────┐
//! │  Empty   │────────────────────►│ Showing  │◄──┐ set_tip_position
//! │ (neutral)│◄────────────────────│ results  │───┘ increment/decrement_split
//! └──────────┘  set_bill (invalid) └──────────┘
//!       ▲             reset_form         │
//!       └────────────────────────────────┘
//! ```

use tracing::{debug, warn};

use crate::error::AppResult;
use crate::state::{FormState, FormSummary};

/// Gets the current summary without changing anything.
pub fn get_summary(form: &FormState) -> FormSummary {
    debug!("get_summary command");
    form.with_form(|f| f.summary())
}

/// Replaces the bill text.
///
/// Never fails: invalid text just yields a summary without results.
pub fn set_bill(form: &FormState, text: &str) -> FormSummary {
    debug!(bill_text = %text, "set_bill command");
    form.with_form_mut(|f| {
        f.set_bill_text(text);
        if !f.is_valid_bill() {
            warn!(bill_text = %text, "bill text is not a valid amount, hiding results");
        }
        f.summary()
    })
}

/// Moves the tip slider to `position` in `[0.0, 1.0]`.
pub fn set_tip_position(form: &FormState, position: f64) -> AppResult<FormSummary> {
    debug!(position = %position, "set_tip_position command");
    form.with_form_mut(|f| -> AppResult<FormSummary> {
        f.move_slider(position)?;
        Ok(f.summary())
    })
}

/// Sets the tip percentage directly.
pub fn set_tip_percentage(form: &FormState, pct: i64) -> AppResult<FormSummary> {
    debug!(pct = %pct, "set_tip_percentage command");
    form.with_form_mut(|f| -> AppResult<FormSummary> {
        f.set_tip_percentage(pct)?;
        Ok(f.summary())
    })
}

/// "+" next to the split count.
pub fn increment_split(form: &FormState) -> FormSummary {
    debug!("increment_split command");
    form.with_form_mut(|f| {
        f.increment_split();
        f.summary()
    })
}

/// "-" next to the split count.
pub fn decrement_split(form: &FormState) -> FormSummary {
    debug!("decrement_split command");
    form.with_form_mut(|f| {
        f.decrement_split();
        f.summary()
    })
}

/// Sets the split count directly; must be inside the configured range.
pub fn set_split(form: &FormState, count: i64) -> AppResult<FormSummary> {
    debug!(count = %count, "set_split command");
    form.with_form_mut(|f| -> AppResult<FormSummary> {
        f.set_split_count(count)?;
        Ok(f.summary())
    })
}

/// Clears the form.
pub fn reset_form(form: &FormState) -> FormSummary {
    debug!("reset_form command");
    form.with_form_mut(|f| {
        f.reset();
        f.summary()
    })
}
