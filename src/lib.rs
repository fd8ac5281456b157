//! Contact form relay library.
//!
//! Validates and sanitizes public contact-form submissions and files each
//! accepted one as an issue in a configured GitHub repository.

pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod relay;
pub mod submission;
pub mod tracker;

pub use config::schema::RelayConfig;
pub use error::ContactError;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
