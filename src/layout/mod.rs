// ============================================================================
// Record Layout Module
// Classifies, slices and assembles COTAHIST lines
// ============================================================================

mod assembler;
mod errors;
mod field_map;
mod field_spec;
mod line_decoder;
mod record_type;

#[cfg(test)]
pub(crate) mod test_lines;

pub use assembler::assemble;
pub use errors::{DecodeError, DecodeResult, FieldError, FieldErrorKind};
pub use field_map::{FieldMap, FieldValue};
pub use field_spec::{
    data_fields, field_offset, FieldDecoder, FieldSpec, DATA_LINE_WIDTH, DATA_PAYLOAD_WIDTH,
};
pub use line_decoder::{DecodedLine, LineDecoder};
pub use record_type::RecordType;
