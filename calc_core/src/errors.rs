//! # Error Types
//!
//! Structured error types for calc_core. These errors are designed to be
//! informative for both humans and LLMs, providing enough context to
//! understand and fix issues programmatically.
//!
//! Every precondition violation of a calculation (a non-positive stroke,
//! speed, acceleration, length, modulus or inertia) is reported as a
//! [`CalcError::DomainError`]. The remaining variants cover the boundary work
//! the front ends do before a calculation runs: parsing form text, reading
//! settings files and decoding JSON requests.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::errors::{CalcError, CalcResult};
//!
//! fn validate_length(length_m: f64) -> CalcResult<()> {
//!     if length_m <= 0.0 {
//!         return Err(CalcError::domain(
//!             "length_m",
//!             length_m.to_string(),
//!             "Length must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_length(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for calc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by LLMs and other consumers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input violates a precondition of the formula (division by zero,
    /// non-physical value). No partial result is ever produced alongside it.
    #[error("Domain error for '{field}': {value} - {reason}")]
    DomainError {
        field: String,
        value: String,
        reason: String,
    },

    /// Text entered in a form or on the command line is not a number
    #[error("Could not read '{field}': '{text}' is not a number")]
    ParseError { field: String, text: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create a DomainError
    pub fn domain(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::DomainError {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a ParseError
    pub fn parse(field: impl Into<String>, text: impl Into<String>) -> Self {
        CalcError::ParseError {
            field: field.into(),
            text: text.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Check if this error comes from the calculation itself rather than
    /// from reading its inputs
    pub fn is_domain_error(&self) -> bool {
        matches!(self, CalcError::DomainError { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::DomainError { .. } => "DOMAIN_ERROR",
            CalcError::ParseError { .. } => "PARSE_ERROR",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::serialization(err.to_string())
    }
}

/// Require `value` to be strictly positive.
///
/// NaN fails the check, so a value that slipped through as NaN is rejected
/// the same way as zero.
pub fn require_positive(field: &str, value: f64, reason: &str) -> CalcResult<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(CalcError::domain(field, value.to_string(), reason))
    }
}

/// Require `value` to be zero or positive and finite.
pub fn require_non_negative(field: &str, value: f64, reason: &str) -> CalcResult<()> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(CalcError::domain(field, value.to_string(), reason))
    }
}

/// Parse a form field into a finite f64.
///
/// Surrounding whitespace is ignored; `inf` and `NaN` are refused like any
/// other non-number. Used by both front ends so a bad entry produces the
/// same message everywhere.
pub fn parse_field(field: &str, text: &str) -> CalcResult<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| CalcError::parse(field, text))
}
