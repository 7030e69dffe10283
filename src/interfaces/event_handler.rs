// ============================================================================
// Reader Event Interface
// Defines the contract for observing what a reader does with each line
// ============================================================================

use crate::layout::DecodeError;
use crate::reader::ReaderStats;
use parking_lot::Mutex;

/// Events emitted by a historical quotes reader
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReaderEvent {
    /// Header record read
    HeaderSeen { line_number: u64 },

    /// Trailer record read
    TrailerSeen { line_number: u64 },

    /// Line dropped without producing a record
    LineSkipped {
        line_number: u64,
        error: DecodeError,
    },

    /// More lines were skipped than the configured limit allows
    SkipLimitReached { line_number: u64, skipped: u64 },

    /// Reading the underlying stream failed; the reader is closed
    IoError { line_number: u64, message: String },

    /// Reader closed, with final counters
    Closed { stats: ReaderStats },
}

/// Event handler trait for observing reader progress
/// Implementations can handle logging, counting, alerting, etc.
pub trait ReaderEventHandler: Send + Sync {
    /// Handle a reader event
    fn on_event(&self, event: &ReaderEvent);
}

/// No-op event handler
pub struct NoOpEventHandler;

impl ReaderEventHandler for NoOpEventHandler {
    fn on_event(&self, _event: &ReaderEvent) {
        // Do nothing
    }
}

/// Logging event handler
pub struct LoggingEventHandler;

impl ReaderEventHandler for LoggingEventHandler {
    fn on_event(&self, event: &ReaderEvent) {
        match event {
            ReaderEvent::LineSkipped { line_number, error } => {
                tracing::warn!(line_number, "skipping line: {}", error);
            },
            ReaderEvent::SkipLimitReached {
                line_number,
                skipped,
            } => {
                tracing::warn!(line_number, skipped, "skip limit reached, closing reader");
            },
            ReaderEvent::IoError {
                line_number,
                message,
            } => {
                tracing::error!(line_number, "read failed: {}", message);
            },
            ReaderEvent::Closed { stats } => {
                tracing::info!(
                    lines = stats.lines_read,
                    records = stats.records,
                    skipped = stats.skipped,
                    "reader closed"
                );
            },
            other => tracing::debug!("Reader event: {:?}", other),
        }
    }
}

/// Handler that keeps every event, for inspection after reading
#[derive(Default)]
pub struct CollectingEventHandler {
    events: Mutex<Vec<ReaderEvent>>,
}

impl CollectingEventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events received so far
    pub fn events(&self) -> Vec<ReaderEvent> {
        self.events.lock().clone()
    }

    /// Line numbers of skipped lines, in order
    pub fn skipped_lines(&self) -> Vec<u64> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                ReaderEvent::LineSkipped { line_number, .. } => Some(*line_number),
                _ => None,
            })
            .collect()
    }
}

impl ReaderEventHandler for CollectingEventHandler {
    fn on_event(&self, event: &ReaderEvent) {
        self.events.lock().push(event.clone());
    }
}
