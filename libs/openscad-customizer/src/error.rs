//! # Customizer Errors
//!
//! Errors raised when a caller edits parameter values. Extraction itself
//! never fails.

use crate::parameter::ParameterType;
use thiserror::Error;

/// Errors that can occur while updating a customizer session.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CustomizerError {
    /// No parameter with this name exists in the current generation.
    #[error("Unknown parameter: {0}")]
    UnknownParameter(String),

    /// The supplied value does not match the parameter's type.
    #[error("Type mismatch for {name}: expected {expected}, got {found}")]
    TypeMismatch {
        name: String,
        expected: ParameterType,
        found: ParameterType,
    },

    /// Numeric values must be finite.
    #[error("Invalid number for {0}: value must be finite")]
    NonFiniteNumber(String),
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CustomizerError::TypeMismatch {
            name: "width".to_string(),
            expected: ParameterType::Number,
            found: ParameterType::String,
        };
        assert_eq!(
            err.to_string(),
            "Type mismatch for width: expected number, got string"
        );
    }

    #[test]
    fn test_unknown_parameter_display() {
        let err = CustomizerError::UnknownParameter("depth".to_string());
        assert!(err.to_string().contains("depth"));
    }
}
