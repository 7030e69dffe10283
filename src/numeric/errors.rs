// ============================================================================
// Numeric Errors
// Error types for digit-string conversions
// ============================================================================

use std::fmt;

/// Errors that can occur while converting a fixed-width digit string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// The field contained only whitespace
    Blank,
    /// The field contained something other than ASCII digits
    NotNumeric,
    /// The value does not fit the target integer type
    Overflow,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Blank => write!(f, "blank numeric field"),
            NumericError::NotNumeric => write!(f, "invalid input: expected ASCII digits"),
            NumericError::Overflow => {
                write!(f, "numeric overflow: value exceeded the target type")
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric conversions
pub type NumericResult<T> = Result<T, NumericError>;
