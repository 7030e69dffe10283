// ============================================================================
// Historical Quotes Reader
// Lazy, forward-only decoding of a COTAHIST stream
// ============================================================================

use super::errors::ReadError;
use crate::domain::{DailyBulletin, ReaderConfig};
use crate::interfaces::{NoOpEventHandler, ReaderEvent, ReaderEventHandler};
use crate::layout::{DecodedLine, LineDecoder};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Lifecycle of a reader
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReaderState {
    /// Stream acquired, nothing read yet
    Open,
    /// At least one line requested
    Reading,
    /// Stream exhausted, failed, or closed by the caller; the stream has
    /// been released
    Closed,
}

/// Line counters of a reader
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReaderStats {
    /// Lines read from the stream, including blank ones
    pub lines_read: u64,
    /// Daily bulletins produced
    pub records: u64,
    pub headers: u64,
    pub trailers: u64,
    /// Empty or whitespace-only lines
    pub blank: u64,
    /// Lines dropped because they could not be decoded
    pub skipped: u64,
}

/// Streaming reader over COTAHIST lines.
///
/// As an [`Iterator`] it yields one [`DailyBulletin`] per valid data line, in
/// file order, and silently skips everything else: header and trailer
/// records, blank lines and lines that fail to decode. Skipped lines are
/// counted in [`ReaderStats`] and reported to the configured
/// [`ReaderEventHandler`]. Use [`HistoricalQuotesReader::try_next`] or
/// [`HistoricalQuotesReader::results`] to observe failures instead.
///
/// The reader owns its stream and drops it as soon as it closes (end of
/// input, I/O error, skip limit) or when the reader itself is dropped.
/// It cannot be rewound; open a new reader to decode again.
///
/// # Example
/// ```
/// use cotahist::reader::HistoricalQuotesReader;
///
/// let input = "00COTAHIST.2020BOVESPA 20200102\n99COTAHIST.2020BOVESPA 20200102\n";
/// let mut reader = HistoricalQuotesReader::new(input.as_bytes());
///
/// assert!(reader.next().is_none());
/// assert_eq!(reader.stats().headers, 1);
/// assert_eq!(reader.stats().trailers, 1);
/// ```
pub struct HistoricalQuotesReader<R> {
    inner: Option<R>,
    decoder: LineDecoder,
    config: ReaderConfig,
    handler: Arc<dyn ReaderEventHandler>,
    buffer: Vec<u8>,
    state: ReaderState,
    stats: ReaderStats,
}

impl HistoricalQuotesReader<BufReader<File>> {
    /// Open a COTAHIST file with the default configuration
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        Self::open_with_config(path, ReaderConfig::default())
    }

    /// Open a COTAHIST file; the file is closed when the reader closes
    pub fn open_with_config(path: impl AsRef<Path>, config: ReaderConfig) -> io::Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "opening historical quotes file");

        let file = File::open(path)?;
        Ok(Self::with_config(BufReader::new(file), config))
    }
}

impl<R: BufRead> HistoricalQuotesReader<R> {
    /// Wrap an already-open stream with the default configuration
    pub fn new(reader: R) -> Self {
        Self::with_config(reader, ReaderConfig::default())
    }

    /// Wrap an already-open stream.
    ///
    /// Pass `&mut stream` to keep ownership of a caller-provided stream.
    pub fn with_config(reader: R, config: ReaderConfig) -> Self {
        Self {
            inner: Some(reader),
            decoder: LineDecoder::new(config.field_failure),
            config,
            handler: Arc::new(NoOpEventHandler),
            buffer: Vec::with_capacity(256),
            state: ReaderState::Open,
            stats: ReaderStats::default(),
        }
    }

    /// Builder method: Set the event handler
    pub fn with_event_handler(mut self, handler: Arc<dyn ReaderEventHandler>) -> Self {
        self.handler = handler;
        self
    }

    pub fn state(&self) -> ReaderState {
        self.state
    }

    pub fn stats(&self) -> &ReaderStats {
        &self.stats
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Strict view: yield every failure instead of skipping it
    pub fn results(self) -> Results<R> {
        Results { reader: self }
    }

    /// Release the stream now. Idempotent.
    pub fn close(&mut self) {
        if self.inner.take().is_some() {
            self.state = ReaderState::Closed;
            self.handler.on_event(&ReaderEvent::Closed { stats: self.stats });
        }
    }

    /// Decode up to the next record or failure.
    ///
    /// Returns `None` once closed. A rejected line is still counted and
    /// reported as skipped; reading continues on the next call unless the
    /// skip limit was exceeded. An I/O error closes the reader.
    pub fn try_next(&mut self) -> Option<Result<DailyBulletin, ReadError>> {
        loop {
            let reader = self.inner.as_mut()?;
            self.state = ReaderState::Reading;

            self.buffer.clear();
            match reader.read_until(b'\n', &mut self.buffer) {
                Ok(0) => {
                    self.close();
                    return None;
                },
                Ok(_) => {},
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => {
                    self.handler.on_event(&ReaderEvent::IoError {
                        line_number: self.stats.lines_read + 1,
                        message: err.to_string(),
                    });
                    self.close();
                    return Some(Err(ReadError::Io(err)));
                },
            }

            self.stats.lines_read += 1;
            let line_number = self.stats.lines_read;
            let line = strip_line_ending(&self.buffer);

            if line.trim_ascii().is_empty() {
                self.stats.blank += 1;
                continue;
            }

            match self.decoder.decode_line(line) {
                Ok(DecodedLine::Bulletin(bulletin)) => {
                    self.stats.records += 1;
                    return Some(Ok(*bulletin));
                },
                Ok(DecodedLine::Header) => {
                    self.stats.headers += 1;
                    self.handler
                        .on_event(&ReaderEvent::HeaderSeen { line_number });
                },
                Ok(DecodedLine::Trailer) => {
                    self.stats.trailers += 1;
                    self.handler
                        .on_event(&ReaderEvent::TrailerSeen { line_number });
                },
                Err(error) => {
                    self.stats.skipped += 1;
                    self.handler.on_event(&ReaderEvent::LineSkipped {
                        line_number,
                        error: error.clone(),
                    });

                    if self.config.skip_limit_exceeded(self.stats.skipped) {
                        self.handler.on_event(&ReaderEvent::SkipLimitReached {
                            line_number,
                            skipped: self.stats.skipped,
                        });
                        self.close();
                    }
                    return Some(Err(ReadError::Line { line_number, error }));
                },
            }
        }
    }
}

impl<R: BufRead> Iterator for HistoricalQuotesReader<R> {
    type Item = DailyBulletin;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.try_next()? {
                Ok(bulletin) => return Some(bulletin),
                Err(_) => continue,
            }
        }
    }
}

impl<R> Drop for HistoricalQuotesReader<R> {
    fn drop(&mut self) {
        if self.inner.take().is_some() {
            self.state = ReaderState::Closed;
            self.handler.on_event(&ReaderEvent::Closed { stats: self.stats });
        }
    }
}

/// Iterator over every outcome of a reader, failures included
pub struct Results<R> {
    reader: HistoricalQuotesReader<R>,
}

impl<R> Results<R> {
    pub fn stats(&self) -> &ReaderStats {
        &self.reader.stats
    }

    pub fn state(&self) -> ReaderState {
        self.reader.state
    }
}

impl<R: BufRead> Iterator for Results<R> {
    type Item = Result<DailyBulletin, ReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.reader.try_next()
    }
}

/// Strip a trailing "\n" or "\r\n"
fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
