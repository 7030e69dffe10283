// ============================================================================
// Record Assembler
// Builds a DailyBulletin from a decoded field map
// ============================================================================

use super::errors::{DecodeError, DecodeResult};
use super::field_map::{FieldMap, FieldValue};
use crate::domain::{DailyBulletin, Quote};

/// Look up and convert a required field.
///
/// A field that is absent or of the wrong kind counts as missing. Picture
/// fields convert with [`FieldValue::into_picture`], so a decoded-but-empty
/// price is present and stays `None`.
fn required<T>(
    fields: &mut FieldMap,
    name: &'static str,
    convert: fn(FieldValue) -> Option<T>,
) -> DecodeResult<T> {
    fields
        .take(name)
        .and_then(convert)
        .ok_or(DecodeError::MissingField(name))
}

/// Look up and convert an optional field; absence stays `None`.
fn optional<T>(
    fields: &mut FieldMap,
    name: &'static str,
    convert: fn(FieldValue) -> Option<T>,
) -> Option<T> {
    fields.take(name).and_then(convert)
}

fn small_integer(value: FieldValue) -> Option<u32> {
    value.into_integer().and_then(|v| u32::try_from(v).ok())
}

fn assemble_quote(fields: &mut FieldMap) -> DecodeResult<Quote> {
    Ok(Quote {
        open: required(fields, "PREABE", FieldValue::into_picture)?,
        high: required(fields, "PREMAX", FieldValue::into_picture)?,
        low: required(fields, "PREMIN", FieldValue::into_picture)?,
        average: required(fields, "PREMED", FieldValue::into_picture)?,
        close: required(fields, "PREULT", FieldValue::into_picture)?,
        best_ask: required(fields, "PREOFC", FieldValue::into_picture)?,
        best_bid: required(fields, "PREOFV", FieldValue::into_picture)?,
    })
}

/// Assemble a data record.
///
/// # Errors
/// `MissingField` naming the first required field that is not present.
pub fn assemble(mut fields: FieldMap) -> DecodeResult<DailyBulletin> {
    let fields = &mut fields;

    Ok(DailyBulletin {
        exchange_date: required(fields, "EXCDAT", FieldValue::into_date)?,
        bulletin_type: required(fields, "CODBDI", FieldValue::into_bulletin_type)?,
        isin: required(fields, "CODISI", FieldValue::into_text)?,
        ticker: required(fields, "CODNEG", FieldValue::into_text)?,
        market_type: required(fields, "TPMERC", FieldValue::into_market_type)?,
        company_short_name: required(fields, "NOMRES", FieldValue::into_text)?,
        specification: required(fields, "ESPECI", FieldValue::into_text)?,
        forward_market_remaining_days: optional(fields, "PRAZOT", small_integer),
        reference_currency: required(fields, "MODREF", FieldValue::into_text)?,
        quote: assemble_quote(fields)?,
        total_trades: required(fields, "TOTNEG", FieldValue::into_integer)?,
        total_quantity: required(fields, "QUATOT", FieldValue::into_integer)?,
        total_volume: required(fields, "VOLTOT", FieldValue::into_picture)?,
        strike_price: optional(fields, "PREEXE", FieldValue::into_decimal),
        strike_price_correction: optional(fields, "INDOPC", FieldValue::into_correction),
        maturity_date: optional(fields, "DATVEN", FieldValue::into_date),
        quote_size: required(fields, "FATCOT", FieldValue::into_quote_size)?,
        strike_price_points: required(fields, "PTOEXE", FieldValue::into_picture)?,
        distribution_number: required(fields, "DISMES", small_integer)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ContractCorrection, DailyBulletinType, MarketType, QuoteSize};
    use crate::layout::field_spec::data_fields;
    use crate::layout::line_decoder::LineDecoder;
    use crate::layout::record_type::RecordType;
    use crate::layout::test_lines::{data_line, with_field};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn fields_of(line: &str) -> FieldMap {
        LineDecoder::default()
            .decode(RecordType::Data, &line.as_bytes()[2..])
            .unwrap()
    }

    #[test]
    fn test_assemble_full_record() {
        let bulletin = assemble(fields_of(&data_line())).unwrap();

        assert_eq!(
            bulletin.exchange_date,
            NaiveDate::from_ymd_opt(2020, 1, 2).unwrap()
        );
        assert_eq!(bulletin.bulletin_type, DailyBulletinType::StandardLot);
        assert_eq!(bulletin.ticker, "PETR4");
        assert_eq!(bulletin.isin, "BRPETRACNPR6");
        assert_eq!(bulletin.market_type, MarketType::Cash);
        assert_eq!(bulletin.company_short_name, "PETROBRAS");
        assert_eq!(bulletin.specification, "PN      N2");
        assert_eq!(bulletin.forward_market_remaining_days, None);
        assert_eq!(bulletin.reference_currency, "R$");
        assert_eq!(bulletin.quote.open, Some(Decimal::new(1050, 2)));
        assert_eq!(bulletin.quote.high, Some(Decimal::new(1100, 2)));
        assert_eq!(bulletin.quote.low, Some(Decimal::new(1025, 2)));
        assert_eq!(bulletin.quote.close, Some(Decimal::new(1080, 2)));
        assert_eq!(bulletin.total_trades, 12);
        assert_eq!(bulletin.total_quantity, 3400);
        assert_eq!(bulletin.total_volume, Some(Decimal::new(3_672_000, 2)));
        assert_eq!(bulletin.strike_price, Some(Decimal::ZERO));
        assert_eq!(bulletin.strike_price_correction, None);
        assert_eq!(
            bulletin.maturity_date,
            NaiveDate::from_ymd_opt(9999, 12, 31)
        );
        assert_eq!(bulletin.quote_size, QuoteSize::Unit);
        assert_eq!(bulletin.strike_price_points, Some(Decimal::ZERO));
        assert_eq!(bulletin.distribution_number, 142);
    }

    #[test]
    fn test_optional_fields_present() {
        let line = with_field(&data_line(), "PRAZOT", "030");
        let line = with_field(&line, "INDOPC", "1");
        let bulletin = assemble(fields_of(&line)).unwrap();

        assert_eq!(bulletin.forward_market_remaining_days, Some(30));
        assert_eq!(
            bulletin.strike_price_correction,
            Some(ContractCorrection::UsDollar)
        );
    }

    #[test]
    fn test_blank_strike_is_absent_not_zero() {
        let line = with_field(&data_line(), "PREEXE", "");
        let bulletin = assemble(fields_of(&line)).unwrap();

        assert_eq!(bulletin.strike_price, None);
    }

    #[test]
    fn test_corrupt_pictures_keep_the_record() {
        let line = with_field(&data_line(), "PREULT", "12AB");
        let line = with_field(&line, "VOLTOT", "");
        let line = with_field(&line, "PTOEXE", "12AB");
        let bulletin = assemble(fields_of(&line)).unwrap();

        assert_eq!(bulletin.quote.close, None);
        assert_eq!(bulletin.quote.open, Some(Decimal::new(1050, 2)));
        assert_eq!(bulletin.total_volume, None);
        assert_eq!(bulletin.strike_price_points, None);
        assert_eq!(bulletin.close_per_unit(), None);
    }

    #[test]
    fn test_absent_picture_is_missing() {
        let mut fields = fields_of(&data_line());
        fields.take("PREULT");

        assert_eq!(
            assemble(fields).unwrap_err(),
            DecodeError::MissingField("PREULT")
        );
    }

    #[test]
    fn test_missing_required_field() {
        let mut fields = fields_of(&data_line());
        fields.take("EXCDAT");

        assert_eq!(
            assemble(fields).unwrap_err(),
            DecodeError::MissingField("EXCDAT")
        );
    }

    #[test]
    fn test_empty_map() {
        assert!(matches!(
            assemble(FieldMap::new()),
            Err(DecodeError::MissingField(_))
        ));
    }

    #[test]
    fn test_every_required_field_is_checked() {
        let optional = ["PRAZOT", "PREEXE", "INDOPC", "DATVEN"];

        for spec in data_fields() {
            let mut fields = fields_of(&data_line());
            fields.take(spec.name);

            let result = assemble(fields);
            if optional.contains(&spec.name) {
                assert!(result.is_ok(), "{} should be optional", spec.name);
            } else {
                assert_eq!(result, Err(DecodeError::MissingField(spec.name)));
            }
        }
    }
}
