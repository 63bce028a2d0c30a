//! Analytics error types
//!
//! Defines the standardized error type for validation, statistics and
//! regression operations.

use thiserror::Error;

/// Result type alias for analytics operations
pub type Result<T> = std::result::Result<T, AnalyticsError>;

/// Errors that can occur while analyzing or forecasting job market data
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyticsError {
    /// Client input failed a validation rule; the message is client-facing
    #[error("{message}")]
    Validation { message: String },

    /// Insufficient data points for the operation
    #[error("insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Invalid parameter value
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Model has not been fitted yet
    #[error("model must be fitted before prediction")]
    NotFitted,

    /// Numerical computation error
    #[error("numerical error: {0}")]
    Numerical(String),
}

impl AnalyticsError {
    /// Shorthand for a validation failure
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Whether this error maps to a client-side (400) response
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}
