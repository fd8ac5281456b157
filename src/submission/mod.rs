//! Submission validation and sanitization subsystem.
//!
//! # Data Flow
//! ```text
//! request body
//!     → types.rs (RawSubmission: untyped, untrusted)
//!     → validate.rs (size → presence → email shape → honeypot
//!                    → sanitize → post-sanitize emptiness)
//!     → sanitize.rs (markup stripping, line folding)
//!     → ValidationOutcome (Accepted | Honeypot | Rejected)
//! ```
//!
//! # Design Decisions
//! - Pure and synchronous: no I/O, no configuration beyond the size ceiling
//! - An Accepted record can be pasted verbatim into Markdown without
//!   changing the document structure

pub mod sanitize;
pub mod types;
pub mod validate;

pub use types::{CleanSubmission, RawSubmission, Rejection, ValidationOutcome, DEFAULT_SUBJECT};
pub use validate::validate;
