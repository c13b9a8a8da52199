//! # App Error Type
//!
//! Unified error type for CLI commands.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Command Function → Result<T, AppError>                                 │
//! │         │                                                               │
//! │         ├── Config Error?  ─── ConfigError::InvalidValue ──┐            │
//! │         │                                                  │            │
//! │         ├── Core Error?    ─── CoreError::Invalid*  ───────┼─► AppError │
//! │         │                                                  │            │
//! │         └── Bad event line ─── AppError::usage(...) ───────┘            │
//! │                                                                         │
//! │  Text mode prints "error: <message>" to stderr.                         │
//! │  JSON mode prints { "code": ..., "message": ... } to stdout.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tipsplit_core::CoreError;

use crate::state::ConfigError;

/// Error returned from commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "INVALID_SPLIT_COUNT",
///   "message": "Invalid split count 0: must be between 1 and 100"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    InvalidBillAmount,
    InvalidSplitCount,
    InvalidTipPercentage,
    InvalidSliderPosition,

    /// Bill text could not be parsed
    ValidationError,

    /// Bad configuration value
    ConfigError,

    /// Unknown interactive command or bad argument
    UsageError,

    /// Reading input or writing output failed
    Io,

    /// Serializing output failed
    Internal,
}

impl AppError {
    /// Creates a new app error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }

    /// Creates a usage error.
    pub fn usage(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::UsageError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to app errors.
impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        let code = match &err {
            CoreError::InvalidBillAmount { .. } => ErrorCode::InvalidBillAmount,
            CoreError::InvalidSplitCount { .. } => ErrorCode::InvalidSplitCount,
            CoreError::InvalidTipPercentage { .. } => ErrorCode::InvalidTipPercentage,
            CoreError::InvalidSliderPosition { .. } => ErrorCode::InvalidSliderPosition,
            CoreError::InvalidSplitRange { .. } => ErrorCode::ConfigError,
            CoreError::Validation(_) => ErrorCode::ValidationError,
        };
        // Validation already carries its own context; drop the wrapper prefix
        let message = match err {
            CoreError::Validation(inner) => inner.to_string(),
            other => other.to_string(),
        };
        AppError::new(code, message)
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        tracing::error!("I/O failure: {}", err);
        AppError::new(ErrorCode::Io, err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::internal(format!("Failed to serialize output: {}", err))
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}

/// Convenience type alias for command results.
pub type AppResult<T> = Result<T, AppError>;
