//! Contact form endpoint handlers.

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{HeaderMap, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::error::{success_response, ContactError};
use crate::http::request::RequestIdExt;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::relay::relay;
use crate::submission::RawSubmission;

/// Accept one contact-form submission.
///
/// Registered for every method so the 405 answer stays under our control.
pub async fn submit_contact(
    State(state): State<AppState>,
    method: Method,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let request_id = headers.request_id().to_string();

    if method != Method::POST {
        tracing::debug!(request_id = %request_id, method = %method, "Rejected non-POST request");
        return finish(Err(ContactError::MethodNotAllowed));
    }

    let body = match body {
        Ok(body) => body,
        Err(rejection) => {
            tracing::warn!(request_id = %request_id, error = %rejection, "Failed to read request body");
            let err = if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                ContactError::PayloadTooLarge
            } else {
                ContactError::InternalError
            };
            return finish(Err(err));
        }
    };

    let raw = RawSubmission::from_body(&body);
    let result = relay(&request_id, &raw, &state.forwarder, state.max_payload_chars).await;
    finish(result.map(|delivery| delivery.as_str()))
}

fn finish(result: Result<&'static str, ContactError>) -> Response {
    match result {
        Ok(outcome) => {
            metrics::record_submission(outcome);
            success_response()
        }
        Err(err) => {
            metrics::record_submission(err.as_str());
            err.into_response()
        }
    }
}

#[derive(Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
}

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
