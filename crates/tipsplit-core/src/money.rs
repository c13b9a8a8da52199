//! # Money Module
//!
//! Display-time rounding and formatting of calculator results.
//!
//! ## Where Rounding Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Calculators work in f64 with NO intermediate rounding:                 │
//! │                                                                         │
//! │    tip   = 100.0 * 15 / 100      = 15.0                                 │
//! │    share = (100.0 + 15.0) / 3    = 38.333333…                           │
//! │                                                                         │
//! │  Only the display converts to whole cents:                              │
//! │                                                                         │
//! │    Money::try_from_amount(38.333333…) → 3833 cents → "$38.33"           │
//! │                                                                         │
//! │  Three shares of $38.33 = $114.99. The lost cent is a display artefact, │
//! │  the underlying f64 values still sum to the bill.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Bills have no upper bound, but whole cents only fit in an `i64` up to about
//! 9.2e16. [`format_amount`] prints anything past that straight from the f64.
//!
//! ## Usage
//! ```rust
//! use tipsplit_core::money::{format_amount, Money};
//!
//! let share = Money::try_from_amount(28.75).unwrap();
//! assert_eq!(share.cents(), 2875);
//! assert_eq!(share.to_string(), "$28.75");
//! assert_eq!(share.format_with_symbol("€"), "€28.75");
//!
//! assert_eq!(format_amount(1e20, "$"), "$100000000000000000000.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Default display prefix.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// A rounded monetary value in the smallest currency unit (cents).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Rounds a floating point amount to the nearest cent.
    ///
    /// Halves round away from zero. Returns `None` for non-finite input and
    /// for amounts whose cents do not fit in an `i64`.
    pub fn try_from_amount(amount: f64) -> Option<Self> {
        if !amount.is_finite() {
            return None;
        }
        let cents = (amount * 100.0).round();
        // i64::MAX as f64 is 2^63, the first value the cast would saturate on
        if cents.abs() >= i64::MAX as f64 {
            return None;
        }
        Some(Money(cents as i64))
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Formats with two decimals and the given currency prefix.
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            symbol,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Shows the value with the default `$` prefix, e.g. `$28.75`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol(DEFAULT_CURRENCY_SYMBOL))
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Formats an amount for display with two decimals and `symbol` as prefix.
///
/// Goes through [`Money`] when the amount fits in cents. Larger amounts are
/// printed from the f64 directly instead of being clamped.
pub fn format_amount(amount: f64, symbol: &str) -> String {
    match Money::try_from_amount(amount) {
        Some(money) => money.format_with_symbol(symbol),
        None => {
            let sign = if amount < 0.0 { "-" } else { "" };
            format!("{}{}{:.2}", sign, symbol, amount.abs())
        }
    }
}

/// Rounds an amount to two decimal places, for display only.
///
/// Amounts too large for whole cents are returned unchanged; an f64 that
/// big has no fractional digits left anyway.
///
/// ## Example
/// ```rust
/// use tipsplit_core::money::round_to_cents;
///
/// assert_eq!(round_to_cents(38.333333), 38.33);
/// ```
pub fn round_to_cents(amount: f64) -> f64 {
    match Money::try_from_amount(amount) {
        Some(money) => money.cents() as f64 / 100.0,
        None => amount,
    }
}
