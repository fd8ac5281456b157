//! Request identification.
//!
//! # Responsibilities
//! - Name the correlation header shared by every layer
//! - Read the request ID back out for logging
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing (outermost layer)
//! - Client-supplied IDs are kept; missing ones get a UUID v4
//! - The same ID is echoed on the response

use axum::http::HeaderMap;

pub const X_REQUEST_ID: &str = "x-request-id";

/// Access to the request ID assigned by the request-id layer.
pub trait RequestIdExt {
    /// The request ID, or `"unknown"` when no layer assigned one.
    fn request_id(&self) -> &str;
}

impl RequestIdExt for HeaderMap {
    fn request_id(&self) -> &str {
        self.get(X_REQUEST_ID)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("unknown")
    }
}
