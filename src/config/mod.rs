//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize, environment overrides)
//!     → validation.rs (semantic checks)
//!     → RelayConfig (validated, immutable)
//!     → shared via Arc to the HTTP layer and the tracker client
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; the process reads it exactly once
//! - All fields have defaults to allow minimal configs
//! - The tracker credential comes from the environment and is never serialized
//! - A missing credential or repository is a startup failure, not a request error

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_from_env, ConfigError};
pub use schema::RelayConfig;
pub use schema::{CorsConfig, LimitsConfig, ListenerConfig, ObservabilityConfig, TimeoutConfig, TrackerConfig};
