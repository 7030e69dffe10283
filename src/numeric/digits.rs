// ============================================================================
// Digit Strings
// ============================================================================

use super::errors::{NumericError, NumericResult};

/// Strip surrounding ASCII whitespace from a raw field slice.
#[inline]
pub fn trim_field(raw: &[u8]) -> &[u8] {
    raw.trim_ascii()
}

/// Parse a zero-padded, unsigned digit field.
///
/// Surrounding whitespace is ignored. Signs, separators and embedded blanks
/// are rejected, so `"  12"` parses but `"1 2"` and `"+12"` do not.
///
/// # Errors
/// - `Blank` if nothing but whitespace is present
/// - `NotNumeric` if any non-digit byte remains after trimming
/// - `Overflow` if the value does not fit in a `u64`
pub fn parse_unsigned(raw: &[u8]) -> NumericResult<u64> {
    let digits = trim_field(raw);
    if digits.is_empty() {
        return Err(NumericError::Blank);
    }

    digits.iter().try_fold(0u64, |acc, &byte| {
        if !byte.is_ascii_digit() {
            return Err(NumericError::NotNumeric);
        }
        acc.checked_mul(10)
            .and_then(|v| v.checked_add(u64::from(byte - b'0')))
            .ok_or(NumericError::Overflow)
    })
}
