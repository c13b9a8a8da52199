//! # Error Types
//!
//! Domain-specific error types for tipsplit-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tipsplit-core errors (this file)                                      │
//! │  ├── CoreError        - Calculator contract violations                 │
//! │  └── ValidationError  - Raw text input failures                        │
//! │                                                                         │
//! │  CLI errors (in app)                                                   │
//! │  └── AppError         - What the terminal front end sees               │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → neutral display        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! None of these are transient. Retrying with the same input yields the
//! same error.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Calculator contract violations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// Bill amount is negative, NaN or infinite.
    #[error("Invalid bill amount {value}: must be a finite number >= 0")]
    InvalidBillAmount { value: f64 },

    /// Split count is outside the allowed range.
    ///
    /// ## When This Occurs
    /// - A caller passes 0 people (would divide by zero)
    /// - A count above the configured maximum reaches a range-checked path
    #[error("Invalid split count {count}: must be between {min} and {max}")]
    InvalidSplitCount { count: i64, min: u32, max: u32 },

    /// Tip percentage is outside [0, 100].
    #[error("Invalid tip percentage {value}: must be between 0 and 100")]
    InvalidTipPercentage { value: i64 },

    /// Slider position is outside [0.0, 1.0] or not finite.
    #[error("Invalid slider position {value}: must be between 0.0 and 1.0")]
    InvalidSliderPosition { value: f64 },

    /// Split range bounds are inconsistent.
    #[error("Invalid split range {min}..={max}: min must be >= 1 and <= max")]
    InvalidSplitRange { min: u32, max: u32 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Raw text input errors.
///
/// Raised before any calculation runs, while turning what the user typed
/// into a value type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Invalid format (e.g., "12.3.4", "abc").
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
