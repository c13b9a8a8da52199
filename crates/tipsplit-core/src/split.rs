//! # Split Count Adjustment
//!
//! The "+" / "-" buttons next to the split count go through here. This is
//! the only rule in the core that acts on state, and it is still a pure
//! function: the caller owns the count and stores the returned value.
//!
//! ```text
//!   decrement:  max(count - 1, min)      1 ──(-)──► 1
//!   increment:  min(count + 1, max)    100 ──(+)──► 100
//! ```

use crate::types::{SplitCount, SplitDelta, SplitRange};

/// Applies one +1 / -1 step to a split count, clamped to `range`.
///
/// A `current` already outside the range is clamped into it first, then
/// stepped, so the result is always inside `[range.min(), range.max()]`.
/// That differs from plain `min(current + 1, max)` below the range: with
/// `1..=100`, incrementing 0 gives 2 (0 clamps to 1, then steps to 2), not 1.
/// Likewise decrementing 250 gives 99.
///
/// ## Example
/// ```rust
/// use tipsplit_core::{adjust_split_count, SplitDelta, SplitRange};
///
/// let range = SplitRange::default(); // 1..=100
/// assert_eq!(adjust_split_count(1, SplitDelta::Decrement, range).value(), 1);
/// assert_eq!(adjust_split_count(100, SplitDelta::Increment, range).value(), 100);
/// assert_eq!(adjust_split_count(3, SplitDelta::Increment, range).value(), 4);
///
/// // Out of range: clamped first, then stepped
/// assert_eq!(adjust_split_count(0, SplitDelta::Increment, range).value(), 2);
/// assert_eq!(adjust_split_count(250, SplitDelta::Decrement, range).value(), 99);
/// ```
pub fn adjust_split_count(current: i64, delta: SplitDelta, range: SplitRange) -> SplitCount {
    let current = range.clamp(current).value() as i64;
    range.clamp(current + delta.step())
}

impl SplitCount {
    /// One more person, up to `range.max()`.
    pub fn increment(self, range: SplitRange) -> SplitCount {
        adjust_split_count(self.value() as i64, SplitDelta::Increment, range)
    }

    /// One fewer person, down to `range.min()`.
    pub fn decrement(self, range: SplitRange) -> SplitCount {
        adjust_split_count(self.value() as i64, SplitDelta::Decrement, range)
    }
}
