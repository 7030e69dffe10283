// ============================================================================
// Scoped Acquisition
// Run a decode over a file path or a caller-owned stream
// ============================================================================

use super::errors::ReadError;
use super::stream::HistoricalQuotesReader;
use crate::domain::ReaderConfig;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

/// Where historical quotes come from
pub enum QuotesSource<'a> {
    /// A file opened (and closed) by the scoped reader
    Path(PathBuf),
    /// A stream the caller owns; it is borrowed and left open
    Stream(&'a mut dyn BufRead),
}

impl<'a> QuotesSource<'a> {
    pub fn path(path: impl Into<PathBuf>) -> Self {
        QuotesSource::Path(path.into())
    }

    pub fn stream(stream: &'a mut dyn BufRead) -> Self {
        QuotesSource::Stream(stream)
    }
}

/// Reader type handed to [`read_historical_quotes`] callbacks
pub type ScopedReader<'a> = HistoricalQuotesReader<Box<dyn BufRead + 'a>>;

/// Decode `source` inside `scope`.
///
/// A file is opened only for [`QuotesSource::Path`]; a caller stream is used
/// as is. Whatever the reader acquired is released when `scope` returns,
/// whether it consumed every record, stopped early, or unwound.
///
/// # Errors
/// `Io` if the file cannot be opened.
///
/// # Example
/// ```
/// use cotahist::domain::ReaderConfig;
/// use cotahist::reader::{read_historical_quotes, QuotesSource};
///
/// let mut input = "00COTAHIST.2020\n99COTAHIST.2020\n".as_bytes();
/// let count = read_historical_quotes(
///     QuotesSource::stream(&mut input),
///     ReaderConfig::default(),
///     |records| records.count(),
/// )
/// .unwrap();
/// assert_eq!(count, 0);
/// ```
pub fn read_historical_quotes<'a, T>(
    source: QuotesSource<'a>,
    config: ReaderConfig,
    scope: impl FnOnce(&mut ScopedReader<'a>) -> T,
) -> Result<T, ReadError> {
    let input: Box<dyn BufRead + 'a> = match source {
        QuotesSource::Path(path) => {
            tracing::debug!(path = %path.display(), "opening historical quotes file");
            Box::new(BufReader::new(File::open(&path)?))
        },
        QuotesSource::Stream(stream) => Box::new(stream),
    };

    let mut reader = HistoricalQuotesReader::with_config(input, config);
    let output = scope(&mut reader);
    reader.close();

    Ok(output)
}
