//! # tipsplit-core: Pure Calculations for tipsplit
//!
//! Tip and bill-splitting arithmetic as pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        tipsplit Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Presentation layer (apps/cli)                   │   │
//! │  │   bill text ──► slider ──► split +/- ──► "Total Per Person"     │   │
//! │  │   owns all mutable state, recomputes on every change            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ validated values                       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ tipsplit-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │calculator │  │   split   │  │   money   │  │   │
//! │  │   │ BillAmount│  │ tip       │  │ +/- clamp │  │ rounding  │  │   │
//! │  │   │ TipPct    │  │ per person│  │           │  │ display   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STATE • PURE FUNCTIONS                            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Value types (BillAmount, TipPercentage, SplitCount, ...)
//! - [`calculator`] - Tip and per-person calculators
//! - [`split`] - Split count +/- clamping
//! - [`money`] - Display rounding and currency formatting
//! - [`validation`] - Bill text parsing
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use tipsplit_core::{calculate_per_person_total, calculate_tip, format_amount};
//!
//! let tip = calculate_tip(100.0, 15).unwrap();
//! assert_eq!(tip, 15.0);
//!
//! let share = calculate_per_person_total(100.0, 4, 15).unwrap();
//! assert_eq!(format_amount(share, "$"), "$28.75");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calculator;
pub mod error;
pub mod money;
pub mod split;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use calculator::{
    calculate_breakdown, calculate_per_person_total, calculate_tip, per_person_total,
    tip_amount, TipBreakdown,
};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::{format_amount, Money};
pub use split::adjust_split_count;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Smallest number of people a bill can be split between.
pub const DEFAULT_SPLIT_MIN: u32 = 1;

/// Default upper bound of the split count control.
pub const DEFAULT_SPLIT_MAX: u32 = 100;

/// Largest tip percentage the slider can produce.
pub const MAX_TIP_PERCENTAGE: u32 = 100;

/// Number of intervals the reference tip slider is quantized into
/// (stops every 1/6 of the track).
pub const DEFAULT_SLIDER_INTERVALS: u32 = 6;

/// Derives the tip percentage from a raw slider position.
///
/// ## Errors
/// `InvalidSliderPosition` if `position` is outside `[0.0, 1.0]`.
///
/// ## Example
/// ```rust
/// use tipsplit_core::tip_percentage_from_slider;
///
/// assert_eq!(tip_percentage_from_slider(0.5).unwrap().value(), 50);
/// assert_eq!(tip_percentage_from_slider(1.0 / 6.0).unwrap().value(), 16);
/// ```
pub fn tip_percentage_from_slider(position: f64) -> CoreResult<TipPercentage> {
    Ok(SliderPosition::new(position)?.tip_percentage())
}
