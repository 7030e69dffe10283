// ============================================================================
// Reader Module
// Streams daily bulletins out of COTAHIST files and buffered readers
// ============================================================================

mod errors;
mod source;
mod stream;

pub use errors::ReadError;
pub use source::{read_historical_quotes, QuotesSource, ScopedReader};
pub use stream::{HistoricalQuotesReader, ReaderState, ReaderStats, Results};
