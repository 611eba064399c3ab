//! Errors raised by the comparison core

use thiserror::Error;

/// Failure of a single comparison attempt.
///
/// Neither variant is fatal; both are surfaced to the user at the call site
/// that triggered the comparison.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompareError {
    /// The selection does not resolve to a leaf of the record table
    #[error("No record found for {gender} / {age_band} / {course} course / {event}")]
    RecordNotFound {
        /// Requested gender key
        gender: String,
        /// Requested age band key
        age_band: String,
        /// Requested course key
        course: String,
        /// Requested event key
        event: String,
    },

    /// A time string does not match `SS(.ff)`, `MM:SS(.ff)` or `HH:MM:SS(.ff)`
    #[error("Invalid time '{input}': {reason}")]
    InvalidFormat {
        /// The rejected input, as entered
        input: String,
        /// Why it was rejected
        reason: String,
    },
}

impl CompareError {
    pub(crate) fn invalid_format(input: &str, reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    /// Whether this error is a lookup miss rather than bad user input
    #[must_use]
    pub const fn is_record_not_found(&self) -> bool {
        matches!(self, Self::RecordNotFound { .. })
    }
}
