//! Response handling for failures outside the normal pipeline.
//!
//! # Design Decisions
//! - A panic anywhere below the catch-panic layer becomes the generic
//!   `{"error":"Server error"}`; the panic text is logged, never returned
//! - So does a request that outlives its deadline, including one whose body
//!   never finishes arriving

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::any::Any;
use std::time::Duration;

use crate::error::ContactError;
use crate::http::request::RequestIdExt;

/// Bound the whole request, body read included, by `limit`.
pub async fn request_deadline(
    State(limit): State<Duration>,
    request: Request,
    next: Next,
) -> Response {
    let request_id = request.headers().request_id().to_string();

    match tokio::time::timeout(limit, next.run(request)).await {
        Ok(response) => response,
        Err(_) => {
            tracing::error!(
                request_id = %request_id,
                timeout_secs = limit.as_secs(),
                "Request deadline exceeded"
            );
            ContactError::InternalError.into_response()
        }
    }
}

/// Convert a caught handler panic into the generic server error.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic"
    };
    tracing::error!(panic = %detail, "Handler panicked");
    ContactError::InternalError.into_response()
}
