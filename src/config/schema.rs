//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the relay.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the contact relay.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RelayConfig {
    /// Listener configuration (bind address, endpoint path).
    pub listener: ListenerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Submission size ceilings.
    pub limits: LimitsConfig,

    /// Issue tracker target and credential.
    pub tracker: TrackerConfig,

    /// Cross-origin settings for the public website.
    pub cors: CorsConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Path the contact form posts to.
    pub contact_path: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            contact_path: "/api/contact".to_string(),
        }
    }
}

/// Timeout configuration for various operations.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Whole-request deadline in seconds, body read included. Must exceed `forward_secs`.
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,

    /// Outbound issue creation timeout in seconds.
    pub forward_secs: u64,

    /// Connection establishment timeout for the tracker in seconds.
    pub connect_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            request_secs: 30,
            forward_secs: 10,
            connect_secs: 5,
        }
    }
}

/// Size limits applied to inbound submissions.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Ceiling on the serialized submission, in UTF-16 code units.
    pub max_payload_chars: usize,

    /// Hard cap on the raw request body in bytes, enforced by the transport.
    pub max_body_bytes: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_payload_chars: 50_000,
            max_body_bytes: 1024 * 1024, // 1MB
        }
    }
}

/// Issue tracker configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// REST API base URL.
    pub api_base: String,

    /// Target repository as "owner/name".
    pub repository: String,

    /// Access token. Normally supplied through the environment, never logged.
    #[serde(skip_serializing)]
    pub token: String,

    /// Label attached to every created issue.
    pub label: String,

    /// User-Agent sent with every tracker call.
    pub user_agent: String,

    /// Provenance shown in the issue footer ("Submitted via ...").
    pub provenance: String,

    /// Text prepended verbatim to every issue title.
    pub title_prefix: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.github.com".to_string(),
            repository: String::new(),
            token: String::new(),
            label: "contact-form".to_string(),
            user_agent: "contact-relay".to_string(),
            provenance: "contact form".to_string(),
            title_prefix: String::new(),
        }
    }
}

/// CORS configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct CorsConfig {
    /// Origins allowed to post the form. Empty allows any origin.
    pub allowed_origins: Vec<String>,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log output format ("pretty" or "json").
    pub log_format: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: "pretty".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RelayConfig::default();
        assert_eq!(config.listener.contact_path, "/api/contact");
        assert_eq!(config.limits.max_payload_chars, 50_000);
        assert_eq!(config.tracker.label, "contact-form");
        assert!(config.tracker.token.is_empty());
        assert!(config.cors.allowed_origins.is_empty());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: RelayConfig = toml::from_str(
            r#"
            [tracker]
            repository = "acme/site"
            "#,
        )
        .unwrap();
        assert_eq!(config.tracker.repository, "acme/site");
        assert_eq!(config.tracker.api_base, "https://api.github.com");
        assert_eq!(config.timeouts.forward_secs, 10);
    }

    #[test]
    fn test_token_not_serialized() {
        let mut config = RelayConfig::default();
        config.tracker.token = "secret-token".into();
        let rendered = toml::to_string(&config).unwrap();
        assert!(!rendered.contains("secret-token"));
    }
}
