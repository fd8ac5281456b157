//! Issue tracker REST client with timeout and error handling.
//!
//! # Responsibilities
//! - Hold the per-deployment endpoint and credential
//! - Send exactly one create-issue request per call
//! - Distinguish "tracker said no" from "tracker unreachable"

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::Client;
use std::time::Duration;
use tokio::time::timeout;

use crate::config::{TimeoutConfig, TrackerConfig};
use crate::tracker::issue::IssuePayload;
use crate::tracker::types::{CreatedIssue, TrackerError, TrackerResult};

const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

/// Anything that can turn an [`IssuePayload`] into a tracked issue.
#[async_trait]
pub trait IssueSink: Send + Sync {
    async fn create_issue(&self, payload: &IssuePayload) -> TrackerResult<CreatedIssue>;
}

/// GitHub Issues client.
///
/// Deliberately not `Debug`: it owns the access token.
#[derive(Clone)]
pub struct GitHubIssueClient {
    client: Client,
    endpoint: String,
    token: String,
    timeout_secs: u64,
}

impl GitHubIssueClient {
    /// Create a new client for the configured repository.
    pub fn new(config: &TrackerConfig, timeouts: &TimeoutConfig) -> TrackerResult<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| TrackerError::Config(format!("failed to build HTTP client: {}", e)))?;

        let endpoint = format!(
            "{}/repos/{}/issues",
            config.api_base.trim_end_matches('/'),
            config.repository
        );

        tracing::info!(
            endpoint = %endpoint,
            forward_timeout_secs = timeouts.forward_secs,
            "Issue tracker client initialized"
        );

        Ok(Self {
            client,
            endpoint,
            token: config.token.clone(),
            timeout_secs: timeouts.forward_secs,
        })
    }

    /// Full URL issues are created at.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl IssueSink for GitHubIssueClient {
    async fn create_issue(&self, payload: &IssuePayload) -> TrackerResult<CreatedIssue> {
        let fut = async {
            let response = self
                .client
                .post(&self.endpoint)
                .header(AUTHORIZATION, format!("token {}", self.token))
                .header(ACCEPT, GITHUB_ACCEPT)
                .json(payload)
                .send()
                .await?;
            let status = response.status();
            // The status alone decides the outcome; a lost body is only logged.
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::warn!(
                        status = status.as_u16(),
                        error = %e,
                        "Failed to read tracker response body"
                    );
                    String::new()
                }
            };
            Ok::<_, reqwest::Error>((status, body))
        };

        match timeout(Duration::from_secs(self.timeout_secs), fut).await {
            Ok(Ok((status, body))) if status.is_success() => Ok(CreatedIssue::from_body(&body)),
            Ok(Ok((status, body))) => Err(TrackerError::Rejected {
                status: status.as_u16(),
                body,
            }),
            Ok(Err(e)) => Err(TrackerError::Transport(e)),
            Err(_) => Err(TrackerError::Timeout(self.timeout_secs)),
        }
    }
}
