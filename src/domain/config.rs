// ============================================================================
// Reader Configuration
// Policies governing how malformed lines are handled
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Field Failure Policy
// ============================================================================

/// What the line decoder does when a single field cannot be decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FieldFailurePolicy {
    /// Stop at the first failing field and reject the whole line.
    /// No partially populated record can be produced.
    #[default]
    AbortLine,

    /// Log the failure, leave the field out and keep going without
    /// advancing past it. Required fields that end up missing still reject
    /// the line at assembly; optional ones surface as `None`.
    LeaveGap,
}

// ============================================================================
// Complete Reader Configuration
// ============================================================================

/// Configuration for a historical quotes reader
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReaderConfig {
    /// Per-field failure handling
    pub field_failure: FieldFailurePolicy,

    /// Optional: Close the reader once more than this many lines were skipped
    /// None means skipped lines are only counted and reported
    pub skip_limit: Option<u64>,
}

impl ReaderConfig {
    /// Create a new configuration with the given field failure policy
    pub fn new(field_failure: FieldFailurePolicy) -> Self {
        Self {
            field_failure,
            skip_limit: None,
        }
    }

    /// Builder method: Set field failure policy
    pub fn with_field_failure(mut self, policy: FieldFailurePolicy) -> Self {
        self.field_failure = policy;
        self
    }

    /// Builder method: Set the skipped-line limit
    pub fn with_skip_limit(mut self, limit: u64) -> Self {
        self.skip_limit = Some(limit);
        self
    }

    /// Whether `skipped` lines exceed the configured limit
    pub(crate) fn skip_limit_exceeded(&self, skipped: u64) -> bool {
        self.skip_limit.is_some_and(|limit| skipped > limit)
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl ReaderConfig {
    /// Strict configuration
    /// - Any field failure rejects its line
    /// - The first rejected line closes the reader
    pub fn strict() -> Self {
        Self::new(FieldFailurePolicy::AbortLine).with_skip_limit(0)
    }

    /// Lenient configuration
    /// - Failing fields leave gaps
    /// - No limit on skipped lines
    pub fn lenient() -> Self {
        Self::new(FieldFailurePolicy::LeaveGap)
    }
}
