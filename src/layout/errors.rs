// ============================================================================
// Decode Errors
// Error types for classifying, slicing and assembling record lines
// ============================================================================

use crate::numeric::NumericError;
use std::fmt;

/// Why a single field could not be decoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldErrorKind {
    /// The line ended before the field's full width
    Truncated { expected: usize, actual: usize },
    /// Digits expected, something else found
    Numeric(NumericError),
    /// Eight digits that do not form a calendar date
    InvalidDate(String),
    /// A code outside the field's enumeration
    UnknownCode(String),
}

impl From<NumericError> for FieldErrorKind {
    fn from(err: NumericError) -> Self {
        FieldErrorKind::Numeric(err)
    }
}

impl fmt::Display for FieldErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldErrorKind::Truncated { expected, actual } => {
                write!(f, "truncated: expected {} bytes, found {}", expected, actual)
            },
            FieldErrorKind::Numeric(err) => write!(f, "{}", err),
            FieldErrorKind::InvalidDate(raw) => write!(f, "invalid date '{}'", raw),
            FieldErrorKind::UnknownCode(raw) => write!(f, "unknown code '{}'", raw),
        }
    }
}

/// A field decode failure, tagged with the field name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub kind: FieldErrorKind,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to read field '{}': {}", self.field, self.kind)
    }
}

impl std::error::Error for FieldError {}

/// Errors produced while turning one line into a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The 2-byte prefix is not a known record type
    UnknownRecordType(String),
    /// A field could not be decoded
    Field(FieldError),
    /// A required field never made it into the field map
    MissingField(&'static str),
}

impl From<FieldError> for DecodeError {
    fn from(err: FieldError) -> Self {
        DecodeError::Field(err)
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::UnknownRecordType(code) => {
                write!(f, "unrecognized record type '{}'", code)
            },
            DecodeError::Field(err) => write!(f, "{}", err),
            DecodeError::MissingField(name) => write!(f, "missing field '{}'", name),
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DecodeError::Field(err) => Some(err),
            _ => None,
        }
    }
}

/// Result type alias for line decoding
pub type DecodeResult<T> = Result<T, DecodeError>;
