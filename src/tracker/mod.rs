//! Issue tracker integration subsystem.
//!
//! # Data Flow
//! ```text
//! CleanSubmission
//!     → issue.rs (title/body/label rendering)
//!     → client.rs (one POST to the repository's issue endpoint)
//!     → forwarder.rs (outcome → success | ForwardingFailed | InternalError)
//! ```
//!
//! # Security Constraints
//! - The access token is only ever read from configuration
//! - Never log the token or echo tracker responses to callers
//! - Every call has a deadline; there are no retries

pub mod client;
pub mod forwarder;
pub mod issue;
pub mod types;

pub use client::{GitHubIssueClient, IssueSink};
pub use forwarder::Forwarder;
pub use issue::{IssuePayload, IssueTemplate};
pub use types::{CreatedIssue, TrackerError, TrackerResult};
