//! Error types for the hub dispatch engine

use thiserror::Error;

/// Hub engine error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HubError {
    /// Clock-time string is not a well-formed "HH:MM"
    #[error("invalid time format: {0:?}")]
    InvalidTimeFormat(String),

    /// Calendar-date string is not a well-formed "YYYY-MM-DD"
    #[error("invalid date format: {0:?}")]
    InvalidDateFormat(String),

    /// A record reached a stage whose required fields are absent
    #[error("incomplete entity {id}: {reason}")]
    IncompleteEntity {
        /// Identifier of the offending record
        id: String,
        /// Which field/condition was missing
        reason: String,
    },

    /// An agent's schedule disagrees with its top-level activity
    #[error("inconsistent schedule for agent {agent}: {ongoing} ongoing entries while {activity}")]
    InconsistentScheduleState {
        /// Agent identifier
        agent: String,
        /// Number of schedule entries currently marked ongoing
        ongoing: usize,
        /// The agent's declared current activity
        activity: String,
    },

    /// A field value is outside its allowed range
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// Result type for the hub engine
pub type HubResult<T> = Result<T, HubError>;

/// Severity of a diagnostic surfaced alongside normal output
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Severity {
    /// Output for the affected record was suppressed (fail closed)
    Error,
    /// Output was produced; the condition is reported for attention
    Warning,
}

/// A data-validity finding attached to an evaluation pass.
///
/// The engine has no I/O, so every failure is a data-validity failure:
/// the affected record is excluded (or flagged) and the condition is
/// reported here rather than retried or silently coerced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Whether the record was excluded or merely flagged
    pub severity: Severity,
    /// Identifier of the record the finding is about
    pub subject: String,
    /// The underlying error
    pub error: HubError,
}

impl Diagnostic {
    /// Error-severity diagnostic: the record was excluded from output
    pub fn error(subject: impl Into<String>, error: HubError) -> Self {
        Self {
            severity: Severity::Error,
            subject: subject.into(),
            error,
        }
    }

    /// Warning-severity diagnostic: output was produced anyway
    pub fn warning(subject: impl Into<String>, error: HubError) -> Self {
        Self {
            severity: Severity::Warning,
            subject: subject.into(),
            error,
        }
    }
}
