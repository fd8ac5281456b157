//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the tracker target and credential are present
//! - Validate value ranges (timeouts > 0, limits > 0)
//! - Keep the tracker timeout inside the request deadline
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RelayConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;
use thiserror::Error;

use crate::config::schema::RelayConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address '{0}' is not a socket address")]
    BindAddress(String),

    #[error("listener.contact_path '{0}' must start with '/'")]
    ContactPath(String),

    #[error("tracker.repository '{0}' must have the form owner/name")]
    Repository(String),

    #[error("tracker.token is empty (set CONTACT_RELAY_TOKEN or GITHUB_TOKEN)")]
    MissingToken,

    #[error("tracker.api_base '{0}' is not a valid http(s) URL")]
    ApiBase(String),

    #[error("tracker.{0} must not be empty")]
    EmptyTrackerField(&'static str),

    #[error("{0} must be greater than zero")]
    Zero(&'static str),

    #[error("timeouts.request_secs ({request_secs}) must exceed timeouts.forward_secs ({forward_secs})")]
    RequestDeadline { request_secs: u64, forward_secs: u64 },

    #[error("observability.log_format '{0}' must be 'pretty' or 'json'")]
    LogFormat(String),

    #[error("observability.metrics_address '{0}' is not a socket address")]
    MetricsAddress(String),
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &RelayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(config.listener.bind_address.clone()));
    }
    if !config.listener.contact_path.starts_with('/') {
        errors.push(ValidationError::ContactPath(config.listener.contact_path.clone()));
    }

    let tracker = &config.tracker;
    if !is_repository_slug(&tracker.repository) {
        errors.push(ValidationError::Repository(tracker.repository.clone()));
    }
    if tracker.token.trim().is_empty() {
        errors.push(ValidationError::MissingToken);
    }
    match url::Url::parse(&tracker.api_base) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        _ => errors.push(ValidationError::ApiBase(tracker.api_base.clone())),
    }
    if tracker.label.trim().is_empty() {
        errors.push(ValidationError::EmptyTrackerField("label"));
    }
    if tracker.user_agent.trim().is_empty() {
        errors.push(ValidationError::EmptyTrackerField("user_agent"));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::Zero("timeouts.request_secs"));
    }
    if config.timeouts.forward_secs == 0 {
        errors.push(ValidationError::Zero("timeouts.forward_secs"));
    }
    if config.timeouts.connect_secs == 0 {
        errors.push(ValidationError::Zero("timeouts.connect_secs"));
    }
    // The tracker call must give up before the request deadline does.
    let timeouts = &config.timeouts;
    if timeouts.request_secs > 0 && timeouts.request_secs <= timeouts.forward_secs {
        errors.push(ValidationError::RequestDeadline {
            request_secs: timeouts.request_secs,
            forward_secs: timeouts.forward_secs,
        });
    }
    if config.limits.max_payload_chars == 0 {
        errors.push(ValidationError::Zero("limits.max_payload_chars"));
    }
    if config.limits.max_body_bytes == 0 {
        errors.push(ValidationError::Zero("limits.max_body_bytes"));
    }

    let format = config.observability.log_format.as_str();
    if format != "pretty" && format != "json" {
        errors.push(ValidationError::LogFormat(format.to_string()));
    }
    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::MetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn is_repository_slug(repository: &str) -> bool {
    let mut parts = repository.split('/');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(owner), Some(name), None) => {
            let valid = |s: &str| {
                !s.is_empty()
                    && s.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
            };
            valid(owner) && valid(name)
        }
        _ => false,
    }
}
