//! # Error Types
//!
//! Structured error types for costwise_core. The estimation engine itself is
//! total (invalid numeric input is clamped at the boundary, see
//! [`crate::params::Parameters::sanitized`]), so these errors only surface
//! from the report writer and from callers doing file or serialization work.
//!
//! ## Example
//!
//! ```rust
//! use costwise_core::errors::{EstimateError, EstimateResult};
//!
//! fn check_path(path: &str) -> EstimateResult<()> {
//!     if path.is_empty() {
//!         return Err(EstimateError::invalid_input(
//!             "path",
//!             path,
//!             "Output path must not be empty",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for costwise_core operations
pub type EstimateResult<T> = Result<T, EstimateError>;

/// Structured error type for estimation operations.
///
/// Each variant provides specific context about what went wrong, enabling
/// programmatic error handling by consumers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum EstimateError {
    /// An input value is invalid (out of range, wrong type, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    Serialization { reason: String },

    /// Report generation failed
    #[error("Report error: {reason}")]
    Report { reason: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    Io {
        operation: String,
        path: String,
        reason: String,
    },
}

impl EstimateError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        EstimateError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an Io error
    pub fn io(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        EstimateError::Io {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for EstimateError {
    fn from(err: serde_json::Error) -> Self {
        EstimateError::Serialization {
            reason: err.to_string(),
        }
    }
}

impl From<csv::Error> for EstimateError {
    fn from(err: csv::Error) -> Self {
        EstimateError::Report {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EstimateError::invalid_input("users", "-5", "User count must be non-negative");
        assert_eq!(
            err.to_string(),
            "Invalid input for 'users': -5 - User count must be non-negative"
        );
    }

    #[test]
    fn test_error_serialization() {
        let err = EstimateError::Report {
            reason: "boom".to_string(),
        };
        let json = serde_json::to_string(&err).unwrap();
        let roundtrip: EstimateError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, roundtrip);
    }
}
