// ============================================================================
// COTAHIST Decoder Library
// Streaming decoder for B3 fixed-width historical quote files
// ============================================================================

//! # cotahist
//!
//! A streaming decoder for the COTAHIST historical quotes files published by
//! B3, the Brazilian exchange.
//!
//! ## Features
//!
//! - **Fixed-width layout table** shared process-wide, built once
//! - **Exact decimals** for prices and volumes (`rust_decimal`, no floats)
//! - **Lazy iteration**: one line is read per record requested
//! - **Resilient**: malformed lines are skipped, counted and reported to a
//!   pluggable event handler instead of aborting the stream
//! - **Company lookup seam** for the exchange's listed-companies service
//!
//! ## Example
//!
//! ```rust
//! use cotahist::prelude::*;
//!
//! let input = "00COTAHIST.2020BOVESPA 20200102\n\
//!              99COTAHIST.2020BOVESPA 20200102\n";
//!
//! let mut reader = HistoricalQuotesReader::new(input.as_bytes());
//! for bulletin in reader.by_ref() {
//!     println!("{} {} close={:?}", bulletin.exchange_date, bulletin.ticker, bulletin.quote.close);
//! }
//!
//! assert_eq!(reader.state(), ReaderState::Closed);
//! assert_eq!(reader.stats().records, 0);
//! ```

pub mod domain;
pub mod interfaces;
pub mod layout;
pub mod numeric;
pub mod reader;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        CompanyDetail, ContractCorrection, DailyBulletin, DailyBulletinType, FieldFailurePolicy,
        MarketType, Quote, QuoteSize, ReaderConfig, RequestError, SecurityCode,
    };
    pub use crate::interfaces::{
        CollectingEventHandler, CompanyDirectory, JsonCompanyDirectory, JsonTransport,
        LoggingEventHandler, NoOpEventHandler, ReaderEvent, ReaderEventHandler,
    };
    pub use crate::layout::{DecodeError, DecodedLine, LineDecoder, RecordType};
    pub use crate::reader::{
        read_historical_quotes, HistoricalQuotesReader, QuotesSource, ReadError, ReaderState,
        ReaderStats,
    };
}
