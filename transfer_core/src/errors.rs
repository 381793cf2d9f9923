//! # Error Types
//!
//! Structured error types for transfer_core. These errors are designed to be
//! informative for both humans and LLMs, providing enough context to
//! understand and fix issues programmatically.
//!
//! Code-compliance problems (a strut angle below the minimum, a shear demand
//! above the section ceiling) are *not* errors - they are reported as
//! findings alongside the numeric results. Errors are reserved for inputs
//! that make the computation itself meaningless.
//!
//! ## Example
//!
//! ```rust
//! use transfer_core::errors::{CalcError, CalcResult};
//!
//! fn validate_span(span_ft: f64) -> CalcResult<()> {
//!     if span_ft <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "span_ft",
//!             span_ft.to_string(),
//!             "Span must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for transfer_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by LLMs and other consumers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (non-positive dimension, load position
    /// outside the span, etc.). All degenerate-geometry divisions are
    /// rejected here before any arithmetic runs.
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A nodal zone could not be formed (strut forces too disproportionate
    /// for the zone's triangle to close).
    #[error("Nodal zone geometry at node {node}: {reason}")]
    NodalGeometry { node: String, reason: String },

    /// Calculation failed (section cannot carry the demand in a way the
    /// closed-form design equations can express).
    #[error("Calculation failed: {calculation_type} - {reason}")]
    CalculationFailed {
        calculation_type: String,
        reason: String,
    },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a NodalGeometry error
    pub fn nodal_geometry(node: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::NodalGeometry {
            node: node.into(),
            reason: reason.into(),
        }
    }

    /// Create a CalculationFailed error
    pub fn calculation_failed(
        calculation_type: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::CalculationFailed {
            calculation_type: calculation_type.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::NodalGeometry { .. } => "NODAL_GEOMETRY",
            CalcError::CalculationFailed { .. } => "CALCULATION_FAILED",
            CalcError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("span_ft", "-5.0", "Span must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            CalcError::invalid_input("a", "0", "degenerate").error_code(),
            "INVALID_INPUT"
        );
        assert_eq!(
            CalcError::nodal_geometry("C", "triangle inequality violated").error_code(),
            "NODAL_GEOMETRY"
        );
    }

    #[test]
    fn test_error_display() {
        let error = CalcError::nodal_geometry("C", "triangle inequality violated");
        assert_eq!(
            error.to_string(),
            "Nodal zone geometry at node C: triangle inequality violated"
        );
    }
}
