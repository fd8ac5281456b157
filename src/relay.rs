//! The per-submission pipeline: validate, then forward at most once.

use crate::error::ContactError;
use crate::submission::{self, RawSubmission, ValidationOutcome};
use crate::tracker::{CreatedIssue, Forwarder};

/// How a successful submission was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// An issue was created.
    Forwarded(CreatedIssue),
    /// The honeypot caught it. Reported as success, nothing was sent.
    Discarded,
}

impl Delivery {
    pub fn as_str(&self) -> &'static str {
        match self {
            Delivery::Forwarded(_) => "forwarded",
            Delivery::Discarded => "honeypot",
        }
    }
}

/// Run `raw` through validation and, if accepted, the forwarder.
pub async fn relay(
    request_id: &str,
    raw: &RawSubmission,
    forwarder: &Forwarder,
    max_payload_chars: usize,
) -> Result<Delivery, ContactError> {
    match submission::validate(raw, max_payload_chars) {
        ValidationOutcome::Rejected(rejection) => {
            tracing::info!(
                request_id = %request_id,
                reason = rejection.as_str(),
                payload_chars = raw.serialized_len(),
                "Submission rejected"
            );
            Err(rejection.into())
        }
        ValidationOutcome::Honeypot => {
            tracing::warn!(request_id = %request_id, "Honeypot filled, discarding submission");
            Ok(Delivery::Discarded)
        }
        ValidationOutcome::Accepted(clean) => {
            let issue = forwarder.forward(request_id, &clean).await?;
            Ok(Delivery::Forwarded(issue))
        }
    }
}
