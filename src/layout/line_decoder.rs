// ============================================================================
// Line Decoder
// Slices a record payload according to the field table
// ============================================================================

use super::assembler::assemble;
use super::errors::{DecodeError, DecodeResult, FieldError};
use super::field_map::FieldMap;
use super::field_spec::data_fields;
use super::record_type::RecordType;
use crate::domain::{DailyBulletin, FieldFailurePolicy};

/// Outcome of decoding one complete line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedLine {
    Header,
    Bulletin(Box<DailyBulletin>),
    Trailer,
}

/// Stateless decoder for COTAHIST lines
#[derive(Debug, Clone, Copy, Default)]
pub struct LineDecoder {
    policy: FieldFailurePolicy,
}

impl LineDecoder {
    pub fn new(policy: FieldFailurePolicy) -> Self {
        Self { policy }
    }

    /// Classify, decode and assemble a full line (without its line ending).
    pub fn decode_line(&self, line: &[u8]) -> DecodeResult<DecodedLine> {
        let (record_type, payload) = RecordType::classify(line)?;

        match record_type {
            RecordType::Header => Ok(DecodedLine::Header),
            RecordType::Trailer => Ok(DecodedLine::Trailer),
            RecordType::Data => {
                let fields = self.decode(record_type, payload)?;
                assemble(fields).map(|bulletin| DecodedLine::Bulletin(Box::new(bulletin)))
            },
        }
    }

    /// Decode the payload of a classified line into a field map.
    ///
    /// Header and trailer records carry no fields in this format and yield an
    /// empty map. For data records the table is walked left to right with a
    /// byte cursor. A field that is truncated or rejected by its decoder is
    /// handled per [`FieldFailurePolicy`]; either way the cursor stays where
    /// the failing field began.
    pub fn decode(&self, record_type: RecordType, payload: &[u8]) -> DecodeResult<FieldMap> {
        let mut fields = FieldMap::new();
        if record_type != RecordType::Data {
            return Ok(fields);
        }

        let mut cursor = 0;
        for spec in data_fields() {
            match spec.slice(payload, cursor).and_then(spec.decode) {
                Ok(value) => {
                    fields.insert(spec.name, value);
                    cursor += spec.width;
                },
                Err(kind) => {
                    let error = FieldError {
                        field: spec.name,
                        kind,
                    };
                    match self.policy {
                        FieldFailurePolicy::AbortLine => return Err(DecodeError::Field(error)),
                        FieldFailurePolicy::LeaveGap => {
                            tracing::debug!(cursor, "{}", error);
                        },
                    }
                },
            }
        }

        Ok(fields)
    }
}
