//! # Calculator Module
//!
//! The two pure functions the whole tool is built on.
//!
//! ## Calculation Pass
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Any input change (bill text, slider, split +/-)                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  tip_amount(bill, tip%)            = bill * tip% / 100                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  per_person_total(bill, n, tip%)   = (bill + tip) / n                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Display rounds to cents (see money module)                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Two flavours of each function:
//! - Typed (`tip_amount`, `per_person_total`): take validated value types
//!   and cannot fail.
//! - Checked (`calculate_tip`, `calculate_per_person_total`): take raw
//!   numbers and fail fast on contract violations instead of producing NaN,
//!   negative tips or a division by zero.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreResult;
use crate::types::{BillAmount, SplitCount, TipPercentage};

// =============================================================================
// Typed Calculators
// =============================================================================

/// Tip for a bill: `bill * tip_percentage / 100`, no intermediate rounding.
#[inline]
pub fn tip_amount(bill: BillAmount, tip: TipPercentage) -> f64 {
    bill.value() * tip.value() as f64 / 100.0
}

/// Share each person pays: `(bill + tip) / split_count`.
#[inline]
pub fn per_person_total(bill: BillAmount, split: SplitCount, tip: TipPercentage) -> f64 {
    (bill.value() + tip_amount(bill, tip)) / split.value() as f64
}

// =============================================================================
// Checked Calculators
// =============================================================================

/// Calculates the tip amount from raw inputs.
///
/// ## Errors
/// - `InvalidBillAmount` if `bill_amount` is negative or not finite
/// - `InvalidTipPercentage` if `tip_percentage` is outside `[0, 100]`
///
/// ## Example
/// ```rust
/// use tipsplit_core::calculate_tip;
///
/// assert_eq!(calculate_tip(100.0, 15).unwrap(), 15.0);
/// assert_eq!(calculate_tip(0.0, 50).unwrap(), 0.0);
/// assert!(calculate_tip(-10.0, 15).is_err());
/// ```
pub fn calculate_tip(bill_amount: f64, tip_percentage: i64) -> CoreResult<f64> {
    let bill = BillAmount::new(bill_amount)?;
    let tip = TipPercentage::new(tip_percentage)?;
    Ok(tip_amount(bill, tip))
}

/// Calculates what each person pays from raw inputs.
///
/// ## Errors
/// - `InvalidBillAmount` if `bill_amount` is negative or not finite
/// - `InvalidSplitCount` if `split_count < 1`
/// - `InvalidTipPercentage` if `tip_percentage` is outside `[0, 100]`
///
/// ## Example
/// ```rust
/// use tipsplit_core::calculate_per_person_total;
///
/// // ($100 + 15% tip) / 4 people
/// assert_eq!(calculate_per_person_total(100.0, 4, 15).unwrap(), 28.75);
/// assert!(calculate_per_person_total(100.0, 0, 15).is_err());
/// ```
pub fn calculate_per_person_total(
    bill_amount: f64,
    split_count: i64,
    tip_percentage: i64,
) -> CoreResult<f64> {
    let bill = BillAmount::new(bill_amount)?;
    let split = SplitCount::new(split_count)?;
    let tip = TipPercentage::new(tip_percentage)?;
    Ok(per_person_total(bill, split, tip))
}

// =============================================================================
// Breakdown
// =============================================================================

/// Everything one calculation pass produces, unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TipBreakdown {
    pub bill_amount: f64,
    pub tip_percentage: u32,
    pub split_count: u32,
    pub tip_amount: f64,
    /// Bill plus tip, before splitting.
    pub total_amount: f64,
    pub total_per_person: f64,
}

/// Runs the tip and split calculators once and collects the results.
pub fn calculate_breakdown(
    bill: BillAmount,
    split: SplitCount,
    tip: TipPercentage,
) -> TipBreakdown {
    let tip_amount = tip_amount(bill, tip);
    TipBreakdown {
        bill_amount: bill.value(),
        tip_percentage: tip.value(),
        split_count: split.value(),
        tip_amount,
        total_amount: bill.value() + tip_amount,
        total_per_person: per_person_total(bill, split, tip),
    }
}
