// ============================================================================
// Record Classifier
// ============================================================================

use super::errors::{DecodeError, DecodeResult};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Record variant, selected by the 2-byte code at the start of every line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RecordType {
    /// "00": file header
    Header,
    /// "01": one instrument's daily quotes
    Data,
    /// "99": file trailer
    Trailer,
}

impl RecordType {
    /// Width of the record-type code in bytes
    pub const CODE_WIDTH: usize = 2;

    pub fn from_code(code: &[u8]) -> Option<Self> {
        match code {
            b"00" => Some(RecordType::Header),
            b"01" => Some(RecordType::Data),
            b"99" => Some(RecordType::Trailer),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            RecordType::Header => "00",
            RecordType::Data => "01",
            RecordType::Trailer => "99",
        }
    }

    /// Split a line into its record type and untouched payload.
    ///
    /// The payload starts at offset 2 and keeps its original spacing; fields
    /// are trimmed individually later.
    ///
    /// # Errors
    /// `UnknownRecordType` carrying the offending prefix (possibly shorter
    /// than two bytes for very short lines).
    pub fn classify(line: &[u8]) -> DecodeResult<(RecordType, &[u8])> {
        let split = line.len().min(Self::CODE_WIDTH);
        let (code, payload) = line.split_at(split);

        match Self::from_code(code) {
            Some(record_type) => Ok((record_type, payload)),
            None => Err(DecodeError::UnknownRecordType(
                code.iter().map(|&b| char::from(b)).collect(),
            )),
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
