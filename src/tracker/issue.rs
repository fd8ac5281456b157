//! Issue formatting.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::config::TrackerConfig;
use crate::submission::CleanSubmission;

/// The JSON body sent to the issue endpoint. Built, sent, dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssuePayload {
    pub title: String,
    pub body: String,
    pub labels: Vec<String>,
}

/// Deployment-fixed parts of every issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueTemplate {
    pub label: String,
    pub provenance: String,
    pub title_prefix: String,
}

impl From<&TrackerConfig> for IssueTemplate {
    fn from(config: &TrackerConfig) -> Self {
        Self {
            label: config.label.clone(),
            provenance: config.provenance.clone(),
            title_prefix: config.title_prefix.clone(),
        }
    }
}

impl IssueTemplate {
    /// Render a sanitized submission into an issue.
    pub fn render(&self, submission: &CleanSubmission, submitted_at: DateTime<Utc>) -> IssuePayload {
        let title = if submission.has_default_subject() {
            format!("{}New message from {}", self.title_prefix, submission.name)
        } else {
            format!("{}{}", self.title_prefix, submission.subject)
        };

        let body = format!(
            "## New Contact Form Submission\n\
             \n\
             **From:** {name}\n\
             **Email:** {email}\n\
             **Subject:** {subject}\n\
             \n\
             ---\n\
             \n\
             ### Message\n\
             \n\
             {message}\n\
             \n\
             ---\n\
             \n\
             *Submitted via {provenance} at {timestamp}*",
            name = submission.name,
            email = submission.email,
            subject = submission.subject,
            message = submission.message,
            provenance = self.provenance,
            timestamp = submitted_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        );

        IssuePayload {
            title,
            body,
            labels: vec![self.label.clone()],
        }
    }
}
