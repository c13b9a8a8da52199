//! # Domain Types
//!
//! Value types flowing through every calculation pass.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   BillAmount    │   │  TipPercentage  │   │   SplitCount    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  f64, >= 0      │   │  u32, 0..=100   │   │  u32, >= 1      │       │
//! │  │  finite         │   │                 │   │                 │       │
//! │  └─────────────────┘   └────────▲────────┘   └────────▲────────┘       │
//! │                                 │                     │                 │
//! │                        ┌────────┴────────┐   ┌────────┴────────┐       │
//! │                        │ SliderPosition  │   │   SplitRange    │       │
//! │                        │  f64, 0.0..=1.0 │   │  min..=max      │       │
//! │                        │  floor(p * 100) │   │  default 1..=100│       │
//! │                        └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every constructor validates, and so does deserialization: the serde impls
//! go through the same constructors. A value of one of these types is always
//! inside its contract. None of them has a lifecycle beyond one calculation.

use serde::{de, Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::{DEFAULT_SPLIT_MAX, DEFAULT_SPLIT_MIN, MAX_TIP_PERCENTAGE};

// =============================================================================
// Bill Amount
// =============================================================================

/// Pre-tip bill total entered by the user.
///
/// ## Invariant
/// Finite and `>= 0`. Negative zero is normalized to `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, TS)]
#[serde(try_from = "f64")]
#[ts(export)]
pub struct BillAmount(f64);

impl BillAmount {
    /// Creates a bill amount, rejecting negative and non-finite values.
    ///
    /// ## Example
    /// ```rust
    /// use tipsplit_core::BillAmount;
    ///
    /// assert!(BillAmount::new(100.0).is_ok());
    /// assert!(BillAmount::new(-1.0).is_err());
    /// assert!(BillAmount::new(f64::NAN).is_err());
    /// ```
    pub fn new(value: f64) -> CoreResult<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(CoreError::InvalidBillAmount { value });
        }
        // -0.0 passes the check above; store it as +0.0
        Ok(BillAmount(value + 0.0))
    }

    /// Zero bill.
    #[inline]
    pub const fn zero() -> Self {
        BillAmount(0.0)
    }

    /// Returns the raw amount.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.0
    }
}

impl Default for BillAmount {
    fn default() -> Self {
        BillAmount::zero()
    }
}

impl TryFrom<f64> for BillAmount {
    type Error = CoreError;

    fn try_from(value: f64) -> CoreResult<Self> {
        BillAmount::new(value)
    }
}

// =============================================================================
// Tip Percentage
// =============================================================================

/// Whole-number tip percentage in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(try_from = "i64")]
#[ts(export)]
pub struct TipPercentage(u32);

impl TipPercentage {
    /// Creates a tip percentage, failing fast outside `[0, 100]`.
    ///
    /// ## Example
    /// ```rust
    /// use tipsplit_core::TipPercentage;
    ///
    /// assert_eq!(TipPercentage::new(15).unwrap().value(), 15);
    /// assert!(TipPercentage::new(101).is_err());
    /// assert!(TipPercentage::new(-5).is_err());
    /// ```
    pub fn new(value: i64) -> CoreResult<Self> {
        if !(0..=MAX_TIP_PERCENTAGE as i64).contains(&value) {
            return Err(CoreError::InvalidTipPercentage { value });
        }
        Ok(TipPercentage(value as u32))
    }

    /// No tip.
    #[inline]
    pub const fn zero() -> Self {
        TipPercentage(0)
    }

    /// Returns the percentage as an integer (15 = 15%).
    #[inline]
    pub const fn value(&self) -> u32 {
        self.0
    }

    /// Returns the percentage as a fraction (15% = 0.15).
    #[inline]
    pub fn as_fraction(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl Default for TipPercentage {
    fn default() -> Self {
        TipPercentage::zero()
    }
}

impl TryFrom<i64> for TipPercentage {
    type Error = CoreError;

    fn try_from(value: i64) -> CoreResult<Self> {
        TipPercentage::new(value)
    }
}

// =============================================================================
// Slider Position
// =============================================================================

/// Position of the continuous tip control, `0.0` (left) to `1.0` (right).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, TS)]
#[serde(try_from = "f64")]
#[ts(export)]
pub struct SliderPosition(f64);

impl SliderPosition {
    /// Creates a slider position, rejecting values outside `[0.0, 1.0]`.
    pub fn new(value: f64) -> CoreResult<Self> {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(CoreError::InvalidSliderPosition { value });
        }
        Ok(SliderPosition(value + 0.0))
    }

    /// Leftmost position.
    #[inline]
    pub const fn start() -> Self {
        SliderPosition(0.0)
    }

    /// Returns the raw position.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Quantizes the position to the nearest of `intervals + 1` evenly
    /// spaced stops.
    ///
    /// `intervals == 0` means a continuous control and returns `self`.
    ///
    /// ## Example
    /// ```rust
    /// use tipsplit_core::SliderPosition;
    ///
    /// // Six intervals: stops at 0, 1/6, 2/6, ... 1
    /// let snapped = SliderPosition::new(0.45).unwrap().snap(6);
    /// assert_eq!(snapped.value(), 0.5);
    /// ```
    pub fn snap(&self, intervals: u32) -> Self {
        if intervals == 0 {
            return *self;
        }
        let n = intervals as f64;
        let stop = (self.0 * n).round();
        SliderPosition((stop / n).clamp(0.0, 1.0))
    }

    /// Derives the tip percentage by truncating `position * 100`.
    ///
    /// ## Truncation, Not Rounding
    /// ```text
    /// position 1/6 → 16.66… → 16%
    /// position 2/6 → 33.33… → 33%
    /// position 4/6 → 66.66… → 66%
    /// ```
    pub fn tip_percentage(&self) -> TipPercentage {
        let pct = (self.0 * 100.0).floor() as u32;
        TipPercentage(pct.min(MAX_TIP_PERCENTAGE))
    }
}

impl Default for SliderPosition {
    fn default() -> Self {
        SliderPosition::start()
    }
}

impl TryFrom<f64> for SliderPosition {
    type Error = CoreError;

    fn try_from(value: f64) -> CoreResult<Self> {
        SliderPosition::new(value)
    }
}

// =============================================================================
// Split Range
// =============================================================================

/// Inclusive range of allowed split counts.
///
/// ## Invariant
/// `1 <= min <= max`. Default is `1..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct SplitRange {
    min: u32,
    max: u32,
}

impl SplitRange {
    /// Creates a split range.
    ///
    /// ## Example
    /// ```rust
    /// use tipsplit_core::SplitRange;
    ///
    /// assert!(SplitRange::new(1, 20).is_ok());
    /// assert!(SplitRange::new(0, 20).is_err()); // 0 people would divide by zero
    /// assert!(SplitRange::new(5, 2).is_err());
    /// ```
    pub fn new(min: u32, max: u32) -> CoreResult<Self> {
        if min < DEFAULT_SPLIT_MIN || min > max {
            return Err(CoreError::InvalidSplitRange { min, max });
        }
        Ok(SplitRange { min, max })
    }

    /// Range `1..=max`.
    pub fn up_to(max: u32) -> CoreResult<Self> {
        SplitRange::new(DEFAULT_SPLIT_MIN, max)
    }

    #[inline]
    pub const fn min(&self) -> u32 {
        self.min
    }

    #[inline]
    pub const fn max(&self) -> u32 {
        self.max
    }

    /// Checks if `count` is inside the range.
    #[inline]
    pub const fn contains(&self, count: u32) -> bool {
        count >= self.min && count <= self.max
    }

    /// Clamps an arbitrary integer into the range.
    pub fn clamp(&self, count: i64) -> SplitCount {
        SplitCount(count.clamp(self.min as i64, self.max as i64) as u32)
    }
}

impl Default for SplitRange {
    fn default() -> Self {
        SplitRange {
            min: DEFAULT_SPLIT_MIN,
            max: DEFAULT_SPLIT_MAX,
        }
    }
}

/// Reads `{ "min": .., "max": .. }` and checks it with [`SplitRange::new`].
impl<'de> Deserialize<'de> for SplitRange {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Bounds {
            min: u32,
            max: u32,
        }

        let bounds = Bounds::deserialize(deserializer)?;
        SplitRange::new(bounds.min, bounds.max).map_err(de::Error::custom)
    }
}

// =============================================================================
// Split Count
// =============================================================================

/// Number of people sharing the bill. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(try_from = "i64")]
#[ts(export)]
pub struct SplitCount(u32);

impl SplitCount {
    /// Creates a split count, failing fast on anything below 1.
    ///
    /// ## Example
    /// ```rust
    /// use tipsplit_core::SplitCount;
    ///
    /// assert_eq!(SplitCount::new(4).unwrap().value(), 4);
    /// assert!(SplitCount::new(0).is_err());
    /// ```
    pub fn new(count: i64) -> CoreResult<Self> {
        if count < DEFAULT_SPLIT_MIN as i64 || count > u32::MAX as i64 {
            return Err(CoreError::InvalidSplitCount {
                count,
                min: DEFAULT_SPLIT_MIN,
                max: u32::MAX,
            });
        }
        Ok(SplitCount(count as u32))
    }

    /// Creates a split count that must also fall inside `range`.
    pub fn within(count: i64, range: SplitRange) -> CoreResult<Self> {
        if count < range.min() as i64 || count > range.max() as i64 {
            return Err(CoreError::InvalidSplitCount {
                count,
                min: range.min(),
                max: range.max(),
            });
        }
        Ok(SplitCount(count as u32))
    }

    /// A single payer.
    #[inline]
    pub const fn one() -> Self {
        SplitCount(1)
    }

    #[inline]
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl Default for SplitCount {
    fn default() -> Self {
        SplitCount::one()
    }
}

impl TryFrom<i64> for SplitCount {
    type Error = CoreError;

    fn try_from(count: i64) -> CoreResult<Self> {
        SplitCount::new(count)
    }
}

// =============================================================================
// Split Delta
// =============================================================================

/// One press of the "+" or "-" control next to the split count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum SplitDelta {
    Increment,
    Decrement,
}

impl SplitDelta {
    /// Signed step (+1 / -1).
    #[inline]
    pub const fn step(&self) -> i64 {
        match self {
            SplitDelta::Increment => 1,
            SplitDelta::Decrement => -1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bill_amount_bounds() {
        assert_eq!(BillAmount::new(0.0).unwrap().value(), 0.0);
        assert_eq!(BillAmount::new(99.95).unwrap().value(), 99.95);
        assert!(BillAmount::new(-0.01).is_err());
        assert!(BillAmount::new(f64::INFINITY).is_err());
        assert!(BillAmount::new(f64::NAN).is_err());
    }

    #[test]
    fn test_negative_zero_bill_normalized() {
        let bill = BillAmount::new(-0.0).unwrap();
        assert!(bill.value().is_sign_positive());
    }

    #[test]
    fn test_tip_percentage_bounds() {
        assert!(TipPercentage::new(0).is_ok());
        assert!(TipPercentage::new(100).is_ok());
        assert_eq!(
            TipPercentage::new(101),
            Err(CoreError::InvalidTipPercentage { value: 101 })
        );
        assert!(TipPercentage::new(-1).is_err());
        assert_eq!(TipPercentage::new(20).unwrap().as_fraction(), 0.2);
    }

    #[test]
    fn test_slider_truncates() {
        let pct = |p: f64| SliderPosition::new(p).unwrap().tip_percentage().value();
        assert_eq!(pct(0.0), 0);
        assert_eq!(pct(0.159), 15);
        assert_eq!(pct(1.0 / 6.0), 16);
        assert_eq!(pct(2.0 / 6.0), 33);
        assert_eq!(pct(0.5), 50);
        assert_eq!(pct(4.0 / 6.0), 66);
        assert_eq!(pct(5.0 / 6.0), 83);
        assert_eq!(pct(1.0), 100);
    }

    #[test]
    fn test_slider_rejects_out_of_range() {
        assert!(SliderPosition::new(-0.1).is_err());
        assert!(SliderPosition::new(1.01).is_err());
        assert!(SliderPosition::new(f64::NAN).is_err());
    }

    #[test]
    fn test_slider_snap() {
        let snap = |p: f64| SliderPosition::new(p).unwrap().snap(6).value();
        assert_eq!(snap(0.0), 0.0);
        assert_eq!(snap(0.05), 0.0);
        assert_eq!(snap(0.45), 0.5);
        assert_eq!(snap(0.99), 1.0);
        assert_eq!(snap(0.2), 1.0 / 6.0);

        let raw = SliderPosition::new(0.37).unwrap();
        assert_eq!(raw.snap(0), raw);
    }

    #[test]
    fn test_split_range() {
        let range = SplitRange::default();
        assert_eq!((range.min(), range.max()), (1, 100));
        assert!(range.contains(1));
        assert!(range.contains(100));
        assert!(!range.contains(0));
        assert!(!range.contains(101));

        assert!(SplitRange::new(1, 1).is_ok());
        assert_eq!(
            SplitRange::new(0, 10),
            Err(CoreError::InvalidSplitRange { min: 0, max: 10 })
        );
        assert!(SplitRange::up_to(0).is_err());
    }

    #[test]
    fn test_split_range_clamp() {
        let range = SplitRange::up_to(10).unwrap();
        assert_eq!(range.clamp(-3).value(), 1);
        assert_eq!(range.clamp(0).value(), 1);
        assert_eq!(range.clamp(7).value(), 7);
        assert_eq!(range.clamp(50).value(), 10);
    }

    #[test]
    fn test_split_count() {
        assert_eq!(SplitCount::new(1).unwrap(), SplitCount::one());
        assert!(SplitCount::new(0).is_err());
        assert!(SplitCount::new(-2).is_err());

        let range = SplitRange::up_to(8).unwrap();
        assert!(SplitCount::within(8, range).is_ok());
        assert_eq!(
            SplitCount::within(9, range),
            Err(CoreError::InvalidSplitCount {
                count: 9,
                min: 1,
                max: 8
            })
        );
    }

    #[test]
    fn test_deserialize_checks_contract() {
        assert!(serde_json::from_str::<SplitCount>("0").is_err());
        assert!(serde_json::from_str::<SplitCount>("-3").is_err());
        assert!(serde_json::from_str::<TipPercentage>("500").is_err());
        assert!(serde_json::from_str::<TipPercentage>("-1").is_err());
        assert!(serde_json::from_str::<BillAmount>("-40.0").is_err());
        assert!(serde_json::from_str::<SliderPosition>("1.5").is_err());
        assert!(serde_json::from_str::<SplitRange>(r#"{"min":0,"max":0}"#).is_err());
        assert!(serde_json::from_str::<SplitRange>(r#"{"min":5,"max":2}"#).is_err());

        let err = serde_json::from_str::<SplitCount>("0").unwrap_err();
        assert!(err.to_string().contains("Invalid split count 0"));
    }

    #[test]
    fn test_deserialize_valid_values() {
        let count: SplitCount = serde_json::from_str("4").unwrap();
        assert_eq!(count.value(), 4);
        let tip: TipPercentage = serde_json::from_str("15").unwrap();
        assert_eq!(tip.value(), 15);
        let bill: BillAmount = serde_json::from_str("84.2").unwrap();
        assert_eq!(bill.value(), 84.2);
        let slider: SliderPosition = serde_json::from_str("0.5").unwrap();
        assert_eq!(slider.value(), 0.5);

        let range = SplitRange::up_to(12).unwrap();
        let json = serde_json::to_string(&range).unwrap();
        assert_eq!(json, r#"{"min":1,"max":12}"#);
        assert_eq!(serde_json::from_str::<SplitRange>(&json).unwrap(), range);
    }

    #[test]
    fn test_split_delta_serde() {
        let json = serde_json::to_string(&SplitDelta::Increment).unwrap();
        assert_eq!(json, "\"increment\"");
        assert_eq!(SplitDelta::Decrement.step(), -1);
    }
}
