//! Submission forwarding: format, send once, classify the outcome.

use chrono::Utc;
use std::sync::Arc;
use std::time::Instant;

use crate::error::ContactError;
use crate::observability::metrics;
use crate::submission::CleanSubmission;
use crate::tracker::client::IssueSink;
use crate::tracker::issue::IssueTemplate;
use crate::tracker::types::{CreatedIssue, TrackerError};

/// Turns accepted submissions into tracker issues.
#[derive(Clone)]
pub struct Forwarder {
    sink: Arc<dyn IssueSink>,
    template: IssueTemplate,
}

impl Forwarder {
    pub fn new(sink: Arc<dyn IssueSink>, template: IssueTemplate) -> Self {
        Self { sink, template }
    }

    /// Create one issue for `submission`. Never retries.
    ///
    /// Tracker detail goes to the log only; the caller gets a generic error.
    pub async fn forward(
        &self,
        request_id: &str,
        submission: &CleanSubmission,
    ) -> Result<CreatedIssue, ContactError> {
        let start = Instant::now();
        let payload = self.template.render(submission, Utc::now());

        match self.sink.create_issue(&payload).await {
            Ok(issue) => {
                metrics::record_forward("created", start);
                tracing::info!(
                    request_id = %request_id,
                    issue_number = ?issue.number,
                    issue_url = issue.html_url.as_deref().unwrap_or("unknown"),
                    "Issue created"
                );
                Ok(issue)
            }
            Err(TrackerError::Rejected { status, body }) => {
                metrics::record_forward("rejected", start);
                tracing::error!(
                    request_id = %request_id,
                    status,
                    tracker_error = %body,
                    "Issue tracker API error"
                );
                Err(ContactError::ForwardingFailed)
            }
            Err(e) => {
                metrics::record_forward("unreachable", start);
                tracing::error!(request_id = %request_id, error = %e, "Issue tracker call failed");
                Err(ContactError::InternalError)
            }
        }
    }
}
