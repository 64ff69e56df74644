// ============================================================================
// Money Errors
// Error types for construction, normalization and arithmetic
// ============================================================================

use std::fmt;

/// Errors that can occur while building or combining monetary values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoneyError {
    /// Value is not an integer inside the safe range `±(2^53 - 1)`
    InvalidConstruction,
    /// Unsupported input while strict parsing is enabled
    InvalidInput,
    /// Attempted division by zero
    DivisionByZero,
    /// Stored units are not a finite safe integer
    NonFinite,
    /// Settings were rejected on update
    InvalidSettings(&'static str),
}

impl fmt::Display for MoneyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyError::InvalidConstruction => {
                write!(f, "invalid construction: integer expected in safe range")
            },
            MoneyError::InvalidInput => write!(f, "invalid input"),
            MoneyError::DivisionByZero => write!(f, "division by zero"),
            MoneyError::NonFinite => write!(f, "invalid value: units are not finite"),
            MoneyError::InvalidSettings(reason) => write!(f, "invalid settings: {}", reason),
        }
    }
}

impl std::error::Error for MoneyError {}

/// Result type alias for money operations
pub type MoneyResult<T> = Result<T, MoneyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(MoneyError::InvalidInput.to_string(), "invalid input");
        assert_eq!(MoneyError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            MoneyError::InvalidSettings("precision too large").to_string(),
            "invalid settings: precision too large"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(MoneyError::InvalidInput, MoneyError::InvalidInput);
        assert_ne!(MoneyError::InvalidInput, MoneyError::InvalidConstruction);
    }
}
