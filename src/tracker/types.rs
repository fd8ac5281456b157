//! Tracker-side types and error definitions.

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur while creating an issue.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// The tracker answered with a non-success status.
    #[error("tracker rejected issue with status {status}: {body}")]
    Rejected { status: u16, body: String },

    /// The request could not be sent or the response not read.
    #[error("tracker request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// No answer within the forwarding deadline.
    #[error("tracker request timed out after {0} seconds")]
    Timeout(u64),

    /// The client could not be built from configuration.
    #[error("tracker client misconfigured: {0}")]
    Config(String),
}

/// Result type for tracker operations.
pub type TrackerResult<T> = Result<T, TrackerError>;

/// What the tracker reported back about a created issue.
///
/// Both fields are best-effort; an unexpected body still counts as success.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CreatedIssue {
    #[serde(default)]
    pub number: Option<u64>,
    #[serde(default)]
    pub html_url: Option<String>,
}

impl CreatedIssue {
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }
}
