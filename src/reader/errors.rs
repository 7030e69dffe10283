// ============================================================================
// Reader Errors
// ============================================================================

use crate::layout::DecodeError;
use std::fmt;
use std::io;

/// Errors surfaced by the strict reader view and the scoped entry point
#[derive(Debug)]
pub enum ReadError {
    /// The underlying stream failed (or could not be opened)
    Io(io::Error),
    /// A line was rejected; `line_number` is 1-based
    Line {
        line_number: u64,
        error: DecodeError,
    },
}

impl From<io::Error> for ReadError {
    fn from(err: io::Error) -> Self {
        ReadError::Io(err)
    }
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::Io(err) => write!(f, "I/O error: {}", err),
            ReadError::Line { line_number, error } => {
                write!(f, "line {}: {}", line_number, error)
            },
        }
    }
}

impl std::error::Error for ReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReadError::Io(err) => Some(err),
            ReadError::Line { error, .. } => Some(error),
        }
    }
}
