// ============================================================================
// Numeric Module
// Exact conversions from fixed-width digit strings
// ============================================================================
//
// This module provides:
// - Picture: COBOL-style PIC 9(n)V9(k) decoder producing rust_decimal values
// - parse_unsigned: strict digit-string to integer conversion
// - NumericError: Error types for both
//
// Design principles:
// - No floating-point operations
// - Corrupt input yields an error or None, never a fabricated zero
// - No panics on arbitrary bytes

mod digits;
mod errors;
mod picture;

pub use digits::{parse_unsigned, trim_field};
pub use errors::{NumericError, NumericResult};
pub use picture::{Picture, PIC_11V99, PIC_16V99, PIC_7V06};
