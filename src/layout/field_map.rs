// ============================================================================
// Decoded Field Map
// Transient name -> value store between the line decoder and the assembler
// ============================================================================

use crate::domain::{ContractCorrection, DailyBulletinType, MarketType, QuoteSize};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use smallvec::SmallVec;

/// Inline capacity; a data record has 25 fields
const INLINE_FIELDS: usize = 25;

/// A decoded field value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Date(NaiveDate),
    OptionalDate(Option<NaiveDate>),
    Text(String),
    Integer(u64),
    OptionalInteger(Option<u32>),
    /// Picture decimal; `None` when the digits were blank or corrupt
    Decimal(Option<Decimal>),
    BulletinType(DailyBulletinType),
    MarketType(MarketType),
    Correction(Option<ContractCorrection>),
    QuoteSize(QuoteSize),
}

impl FieldValue {
    pub fn into_date(self) -> Option<NaiveDate> {
        match self {
            FieldValue::Date(date) => Some(date),
            FieldValue::OptionalDate(date) => date,
            _ => None,
        }
    }

    pub fn into_text(self) -> Option<String> {
        match self {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn into_integer(self) -> Option<u64> {
        match self {
            FieldValue::Integer(value) => Some(value),
            FieldValue::OptionalInteger(value) => value.map(u64::from),
            _ => None,
        }
    }

    pub fn into_decimal(self) -> Option<Decimal> {
        match self {
            FieldValue::Decimal(value) => value,
            _ => None,
        }
    }

    /// Picture decimal that keeps "decoded but empty" apart from "not a
    /// decimal field": the outer `None` is a wrong variant only.
    pub fn into_picture(self) -> Option<Option<Decimal>> {
        match self {
            FieldValue::Decimal(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_bulletin_type(self) -> Option<DailyBulletinType> {
        match self {
            FieldValue::BulletinType(kind) => Some(kind),
            _ => None,
        }
    }

    pub fn into_market_type(self) -> Option<MarketType> {
        match self {
            FieldValue::MarketType(market) => Some(market),
            _ => None,
        }
    }

    pub fn into_correction(self) -> Option<ContractCorrection> {
        match self {
            FieldValue::Correction(correction) => correction,
            _ => None,
        }
    }

    pub fn into_quote_size(self) -> Option<QuoteSize> {
        match self {
            FieldValue::QuoteSize(size) => Some(size),
            _ => None,
        }
    }
}

/// Field values of one line, keyed by field name.
///
/// Stored inline so decoding a line does not allocate for the map itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap {
    entries: SmallVec<[(&'static str, FieldValue); INLINE_FIELDS]>,
}

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the value stored under `name`
    pub fn insert(&mut self, name: &'static str, value: FieldValue) {
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Remove and return the value stored under `name`
    pub fn take(&mut self, name: &str) -> Option<FieldValue> {
        let index = self.entries.iter().position(|(key, _)| *key == name)?;
        Some(self.entries.swap_remove(index).1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut fields = FieldMap::new();
        fields.insert("CODNEG", FieldValue::Text("PETR4".to_string()));
        fields.insert("TOTNEG", FieldValue::Integer(12));

        assert_eq!(fields.len(), 2);
        assert!(fields.contains("CODNEG"));
        assert_eq!(fields.get("TOTNEG"), Some(&FieldValue::Integer(12)));
    }

    #[test]
    fn test_insert_replaces() {
        let mut fields = FieldMap::new();
        fields.insert("TOTNEG", FieldValue::Integer(1));
        fields.insert("TOTNEG", FieldValue::Integer(2));

        assert_eq!(fields.len(), 1);
        assert_eq!(fields.get("TOTNEG"), Some(&FieldValue::Integer(2)));
    }

    #[test]
    fn test_take() {
        let mut fields = FieldMap::new();
        fields.insert("A", FieldValue::Integer(1));
        fields.insert("B", FieldValue::Integer(2));

        assert_eq!(fields.take("A"), Some(FieldValue::Integer(1)));
        assert_eq!(fields.take("A"), None);
        assert!(!fields.is_empty());
    }

    #[test]
    fn test_conversions_keep_absence() {
        assert_eq!(FieldValue::Decimal(None).into_decimal(), None);
        assert_eq!(FieldValue::OptionalInteger(None).into_integer(), None);
        assert_eq!(FieldValue::Correction(None).into_correction(), None);
        assert_eq!(FieldValue::Integer(0).into_integer(), Some(0));
        assert_eq!(FieldValue::Decimal(None).into_picture(), Some(None));
        assert_eq!(FieldValue::Integer(0).into_picture(), None);

        // wrong variant reads as absent
        assert_eq!(FieldValue::Integer(5).into_text(), None);
    }
}
