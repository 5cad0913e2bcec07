//! Error taxonomy for input interpretation and tracker access.
//!
//! Every variant carries the offending input so the message shown to the
//! user explains exactly what was rejected. Parser errors are deterministic
//! and are never retried; only tracker submission has a retry policy, and it
//! lives in [`crate::api::redmine`].

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Malformed or semantically invalid duration text.
    #[error("invalid duration '{input}': {reason}")]
    InvalidDuration { input: String, reason: String },

    /// No activity satisfied the query.
    #[error("no activity matches '{0}'")]
    NoMatch(String),

    /// More than one activity satisfied the query.
    #[error("activity '{query}' is ambiguous, it matches: {}", candidates.join(", "))]
    AmbiguousMatch { query: String, candidates: Vec<String> },

    /// The issue argument is neither `.` nor a positive integer.
    #[error("invalid issue ID '{0}'")]
    InvalidIssueId(String),

    /// The branch name carries no numeric issue ID at either end.
    #[error("no issue ID found in branch name '{0}'")]
    NoIssueId(String),

    /// The directory has no checked-out branch.
    #[error("no branch found in '{directory}': {reason}")]
    NoBranch { directory: String, reason: String },

    /// The tracker does not know this issue.
    #[error("issue #{0} not found")]
    NotFound(u32),

    /// The tracker refused the time entry.
    #[error("time entry rejected ({status}): {details}")]
    Submission { status: String, details: String },

    /// No tracker section in the configuration file.
    #[error("tracker is not configured, run `rlw init` first")]
    NotConfigured,
}

impl Error {
    pub(crate) fn invalid_duration(input: &str, reason: impl Into<String>) -> Self {
        Error::InvalidDuration {
            input: input.to_owned(),
            reason: reason.into(),
        }
    }
}
