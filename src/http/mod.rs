//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware: request ID, trace, CORS, deadline, panic guard)
//!     → contact.rs (method check, body read, relay pipeline)
//!     → response.rs / error.rs (status + JSON body)
//!     → Send to client
//! ```

pub mod contact;
pub mod request;
pub mod response;
pub mod server;

pub use request::{RequestIdExt, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
