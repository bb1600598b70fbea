//! Error types.
//!
//! Parsing failures are local to a single record: the pipeline skips the
//! offending record and keeps going. [`GridError`] is the only error that
//! fails a whole batch, and only under [`ConflictPolicy::Reject`].
//!
//! [`ConflictPolicy::Reject`]: crate::config::ConflictPolicy::Reject

use serde::Serialize;
use thiserror::Error;

use crate::validation::ValidationError;

/// A malformed time, time range, or day value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[serde(tag = "kind", content = "input", rename_all = "snake_case")]
pub enum ParseError {
    /// Not a `HH:MM` time of day.
    #[error("invalid time of day '{0}', expected HH:MM")]
    InvalidTime(String),

    /// Not exactly two `HH:MM` values separated by `-`.
    #[error("invalid time range '{0}', expected HH:MM-HH:MM")]
    InvalidRange(String),

    /// Range whose end is not after its start.
    #[error("time range '{0}' does not end after it starts")]
    EmptyRange(String),

    /// Day name outside Monday..Saturday.
    #[error("unknown day '{0}'")]
    UnknownDay(String),
}

/// Batch-level failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    /// Data-quality issues found while the conflict policy is `Reject`.
    #[error("batch '{batch}' rejected with {} data-quality issues", issues.len())]
    Rejected {
        /// Batch key.
        batch: String,
        /// Every issue detected for the batch.
        issues: Vec<ValidationError>,
    },
}

/// An input record that was skipped because it failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("record {index} of batch '{batch}' skipped: {error}")]
pub struct RecordError {
    /// Position of the record in the caller's input.
    pub index: usize,
    /// Batch key the record belonged to.
    pub batch: String,
    /// Why it was skipped.
    #[source]
    pub error: ParseError,
}
