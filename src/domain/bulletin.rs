// ============================================================================
// Daily Bulletin Domain Model
// ============================================================================

use super::codes::{ContractCorrection, DailyBulletinType, MarketType, QuoteSize};
use chrono::NaiveDate;
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Session prices for one instrument, all in the reference currency.
///
/// A price is `None` when its field was blank or held non-digits; the rest
/// of the record is still usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Quote {
    pub open: Option<Decimal>,
    pub high: Option<Decimal>,
    pub low: Option<Decimal>,
    pub average: Option<Decimal>,
    pub close: Option<Decimal>,
    pub best_ask: Option<Decimal>,
    pub best_bid: Option<Decimal>,
}

impl Quote {
    /// Session range (high - low), if both ends are known.
    pub fn range(&self) -> Option<Decimal> {
        Some(self.high? - self.low?)
    }
}

/// One traded instrument on one exchange date (a COTAHIST data record)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DailyBulletin {
    /// Trading session date
    pub exchange_date: NaiveDate,

    pub bulletin_type: DailyBulletinType,

    /// ISIN of the instrument
    pub isin: String,

    /// Trading code, e.g. "PETR4"
    pub ticker: String,

    pub market_type: MarketType,

    /// Abbreviated issuer name
    pub company_short_name: String,

    /// Share class / instrument specification, e.g. "PN      N2"
    pub specification: String,

    /// Days remaining for forward-market trades; absent for other markets
    pub forward_market_remaining_days: Option<u32>,

    /// Currency the prices are quoted in, e.g. "R$"
    pub reference_currency: String,

    pub quote: Quote,

    /// Number of trades in the session
    pub total_trades: u64,

    /// Number of securities traded
    pub total_quantity: u64,

    /// Financial volume traded; `None` if the field was unreadable
    pub total_volume: Option<Decimal>,

    /// Option strike price; absent when the field carried no value
    pub strike_price: Option<Decimal>,

    /// None when the file reports no correction
    pub strike_price_correction: Option<ContractCorrection>,

    /// Option/forward maturity; absent when the field is blank
    pub maturity_date: Option<NaiveDate>,

    pub quote_size: QuoteSize,

    /// Strike price expressed in points (index options)
    pub strike_price_points: Option<Decimal>,

    /// Distribution number of the security
    pub distribution_number: u32,
}

impl DailyBulletin {
    /// Closing price per single unit, undoing the FATCOT quote factor.
    pub fn close_per_unit(&self) -> Option<Decimal> {
        self.quote
            .close
            .map(|close| close / Decimal::from(self.quote_size.units()))
    }
}
