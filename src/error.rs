//! Caller-visible error taxonomy.
//!
//! Every failure a submitter can observe is one of these variants. Messages
//! are fixed strings; internal detail is logged where it occurs and never
//! carried into the response.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::submission::Rejection;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Payload too large")]
    PayloadTooLarge,

    #[error("Missing required fields")]
    MissingFields,

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Invalid input")]
    InvalidInput,

    /// The tracker answered, but refused the issue.
    #[error("Failed to submit")]
    ForwardingFailed,

    /// The call could not complete, or something unexpected broke.
    #[error("Server error")]
    InternalError,
}

impl ContactError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ContactError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ContactError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ContactError::MissingFields
            | ContactError::InvalidEmail
            | ContactError::InvalidInput => StatusCode::BAD_REQUEST,
            ContactError::ForwardingFailed | ContactError::InternalError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Stable label for logs and metrics.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactError::MethodNotAllowed => "method_not_allowed",
            ContactError::PayloadTooLarge => "payload_too_large",
            ContactError::MissingFields => "missing_fields",
            ContactError::InvalidEmail => "invalid_email",
            ContactError::InvalidInput => "invalid_input",
            ContactError::ForwardingFailed => "forwarding_failed",
            ContactError::InternalError => "internal_error",
        }
    }
}

impl From<Rejection> for ContactError {
    fn from(rejection: Rejection) -> Self {
        match rejection {
            Rejection::PayloadTooLarge => ContactError::PayloadTooLarge,
            Rejection::MissingFields => ContactError::MissingFields,
            Rejection::InvalidEmail => ContactError::InvalidEmail,
            Rejection::InvalidInput => ContactError::InvalidInput,
        }
    }
}

impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        // 405 is the one plain-text answer.
        if self == ContactError::MethodNotAllowed {
            return (
                status,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                self.to_string(),
            )
                .into_response();
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// The success body, `{"success":true}`.
pub fn success_response() -> Response {
    (StatusCode::OK, Json(json!({ "success": true }))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_status_agrees() {
        for rejection in [
            Rejection::PayloadTooLarge,
            Rejection::MissingFields,
            Rejection::InvalidEmail,
            Rejection::InvalidInput,
        ] {
            let err = ContactError::from(rejection);
            assert_eq!(err.status_code().as_u16(), rejection.status());
            assert_eq!(err.to_string(), rejection.message());
            assert_eq!(err.as_str(), rejection.as_str());
        }
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(ContactError::MethodNotAllowed.status_code(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(ContactError::ForwardingFailed.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(ContactError::InternalError.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_response_content_types() {
        let res = ContactError::MethodNotAllowed.into_response();
        assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert!(res.headers()[header::CONTENT_TYPE].to_str().unwrap().starts_with("text/plain"));

        let res = ContactError::InvalidEmail.into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert_eq!(res.headers()[header::CONTENT_TYPE], "application/json");

        let res = success_response();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.headers()[header::CONTENT_TYPE], "application/json");
    }
}
