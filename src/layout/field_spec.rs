// ============================================================================
// Field Specification Table
// Byte layout of the COTAHIST data record (record type "01")
// ============================================================================

use super::errors::FieldErrorKind;
use super::field_map::FieldValue;
use super::record_type::RecordType;
use crate::domain::{ContractCorrection, DailyBulletinType, MarketType, QuoteSize};
use crate::numeric::{parse_unsigned, trim_field, NumericError, PIC_11V99, PIC_16V99, PIC_7V06};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use std::fmt;

const DATE_FORMAT: &str = "%Y%m%d";
const DATE_WIDTH: usize = 8;

/// Converts a raw, untrimmed field slice into a typed value
pub type FieldDecoder = fn(&[u8]) -> Result<FieldValue, FieldErrorKind>;

/// Bytes covered by the data fields, after the record-type code
pub const DATA_PAYLOAD_WIDTH: usize = 243;

/// Full width of a data line
pub const DATA_LINE_WIDTH: usize = RecordType::CODE_WIDTH + DATA_PAYLOAD_WIDTH;

/// One column of the record layout
#[derive(Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub width: usize,
    pub decode: FieldDecoder,
}

impl FieldSpec {
    const fn new(name: &'static str, width: usize, decode: FieldDecoder) -> Self {
        Self {
            name,
            width,
            decode,
        }
    }

    /// Slice this field out of `payload` starting at `cursor`.
    ///
    /// # Errors
    /// `Truncated` if fewer than `width` bytes remain.
    pub fn slice<'a>(&self, payload: &'a [u8], cursor: usize) -> Result<&'a [u8], FieldErrorKind> {
        cursor
            .checked_add(self.width)
            .and_then(|end| payload.get(cursor..end))
            .ok_or(FieldErrorKind::Truncated {
                expected: self.width,
                actual: payload.len().saturating_sub(cursor),
            })
    }
}

impl fmt::Debug for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSpec")
            .field("name", &self.name)
            .field("width", &self.width)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// The Table
// ============================================================================

static DATA_FIELDS: Lazy<[FieldSpec; 25]> = Lazy::new(|| {
    [
        FieldSpec::new("EXCDAT", 8, date),
        FieldSpec::new("CODBDI", 2, bulletin_type),
        FieldSpec::new("CODNEG", 12, text),
        FieldSpec::new("TPMERC", 3, market_type),
        FieldSpec::new("NOMRES", 12, text),
        FieldSpec::new("ESPECI", 10, text),
        FieldSpec::new("PRAZOT", 3, optional_integer),
        FieldSpec::new("MODREF", 4, text),
        FieldSpec::new("PREABE", 13, price),
        FieldSpec::new("PREMAX", 13, price),
        FieldSpec::new("PREMIN", 13, price),
        FieldSpec::new("PREMED", 13, price),
        FieldSpec::new("PREULT", 13, price),
        FieldSpec::new("PREOFC", 13, price),
        FieldSpec::new("PREOFV", 13, price),
        FieldSpec::new("TOTNEG", 5, integer),
        FieldSpec::new("QUATOT", 18, integer),
        FieldSpec::new("VOLTOT", 18, volume),
        FieldSpec::new("PREEXE", 13, price),
        FieldSpec::new("INDOPC", 1, correction),
        FieldSpec::new("DATVEN", 8, optional_date),
        FieldSpec::new("FATCOT", 7, quote_size),
        FieldSpec::new("PTOEXE", 13, points),
        FieldSpec::new("CODISI", 12, text),
        FieldSpec::new("DISMES", 3, integer),
    ]
});

/// The data-record layout, in byte order.
///
/// Built on first use and never mutated, so it can be shared freely across
/// threads.
pub fn data_fields() -> &'static [FieldSpec] {
    DATA_FIELDS.as_slice()
}

/// Byte offset of a data field from the start of the line (record code
/// included), or `None` for an unknown name.
pub fn field_offset(name: &str) -> Option<usize> {
    let mut offset = RecordType::CODE_WIDTH;
    for spec in data_fields() {
        if spec.name == name {
            return Some(offset);
        }
        offset += spec.width;
    }
    None
}

// ============================================================================
// Field Decoders
// ============================================================================

fn text(raw: &[u8]) -> Result<FieldValue, FieldErrorKind> {
    Ok(FieldValue::Text(latin1(trim_field(raw))))
}

fn integer(raw: &[u8]) -> Result<FieldValue, FieldErrorKind> {
    Ok(FieldValue::Integer(parse_unsigned(raw)?))
}

fn optional_integer(raw: &[u8]) -> Result<FieldValue, FieldErrorKind> {
    match parse_unsigned(raw) {
        Ok(value) => {
            let value = u32::try_from(value).map_err(|_| NumericError::Overflow)?;
            Ok(FieldValue::OptionalInteger(Some(value)))
        },
        Err(NumericError::Blank) => Ok(FieldValue::OptionalInteger(None)),
        Err(err) => Err(err.into()),
    }
}

fn date(raw: &[u8]) -> Result<FieldValue, FieldErrorKind> {
    parse_date(raw).map(FieldValue::Date)
}

fn optional_date(raw: &[u8]) -> Result<FieldValue, FieldErrorKind> {
    if trim_field(raw).is_empty() {
        return Ok(FieldValue::OptionalDate(None));
    }
    parse_date(raw).map(|date| FieldValue::OptionalDate(Some(date)))
}

fn price(raw: &[u8]) -> Result<FieldValue, FieldErrorKind> {
    Ok(FieldValue::Decimal(PIC_11V99.decode(raw)))
}

fn volume(raw: &[u8]) -> Result<FieldValue, FieldErrorKind> {
    Ok(FieldValue::Decimal(PIC_16V99.decode(raw)))
}

fn points(raw: &[u8]) -> Result<FieldValue, FieldErrorKind> {
    Ok(FieldValue::Decimal(PIC_7V06.decode(raw)))
}

fn bulletin_type(raw: &[u8]) -> Result<FieldValue, FieldErrorKind> {
    let code = parse_unsigned(raw)?;
    DailyBulletinType::from_code(code)
        .map(FieldValue::BulletinType)
        .ok_or_else(|| unknown_code(raw))
}

fn market_type(raw: &[u8]) -> Result<FieldValue, FieldErrorKind> {
    std::str::from_utf8(trim_field(raw))
        .ok()
        .and_then(MarketType::from_code)
        .map(FieldValue::MarketType)
        .ok_or_else(|| unknown_code(raw))
}

// 0 means "no correction"
fn correction(raw: &[u8]) -> Result<FieldValue, FieldErrorKind> {
    match parse_unsigned(raw)? {
        0 => Ok(FieldValue::Correction(None)),
        code => ContractCorrection::from_code(code)
            .map(|c| FieldValue::Correction(Some(c)))
            .ok_or_else(|| unknown_code(raw)),
    }
}

fn quote_size(raw: &[u8]) -> Result<FieldValue, FieldErrorKind> {
    let code = parse_unsigned(raw)?;
    QuoteSize::from_code(code)
        .map(FieldValue::QuoteSize)
        .ok_or_else(|| unknown_code(raw))
}

// ============================================================================
// Helpers
// ============================================================================

/// YYYYMMDD
fn parse_date(raw: &[u8]) -> Result<NaiveDate, FieldErrorKind> {
    let digits = trim_field(raw);
    if digits.is_empty() {
        return Err(NumericError::Blank.into());
    }
    if !digits.iter().all(u8::is_ascii_digit) {
        return Err(NumericError::NotNumeric.into());
    }
    if digits.len() != DATE_WIDTH {
        return Err(FieldErrorKind::InvalidDate(latin1(digits)));
    }

    std::str::from_utf8(digits)
        .ok()
        .and_then(|text| NaiveDate::parse_from_str(text, DATE_FORMAT).ok())
        .ok_or_else(|| FieldErrorKind::InvalidDate(latin1(digits)))
}

/// Bytes outside ASCII are read as Latin-1, the exchange's legacy charset.
fn latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

fn unknown_code(raw: &[u8]) -> FieldErrorKind {
    FieldErrorKind::UnknownCode(latin1(trim_field(raw)))
}
