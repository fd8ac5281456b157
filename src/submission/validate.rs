//! The submission guard pipeline.

use crate::submission::sanitize::{is_email_shape, sanitize_line, sanitize_message};
use crate::submission::types::{
    CleanSubmission, RawSubmission, Rejection, ValidationOutcome, DEFAULT_SUBJECT,
};

pub const NAME_MAX_CHARS: usize = 100;
pub const EMAIL_MAX_CHARS: usize = 100;
pub const SUBJECT_MAX_CHARS: usize = 200;
pub const MESSAGE_MAX_CHARS: usize = 5000;

/// Name of the hidden honeypot field.
pub const HONEYPOT_FIELD: &str = "website";

/// Run every guard over `raw`, in order, stopping at the first failure.
///
/// Structural checks see the submitter's actual input. Emptiness is checked
/// a second time after sanitization because stripping can hollow out a field
/// that looked valid.
pub fn validate(raw: &RawSubmission, max_payload_chars: usize) -> ValidationOutcome {
    if raw.serialized_len() > max_payload_chars {
        return ValidationOutcome::Rejected(Rejection::PayloadTooLarge);
    }

    let (name, email, message) = match (
        raw.non_empty_text("name"),
        raw.non_empty_text("email"),
        raw.non_empty_text("message"),
    ) {
        (Some(name), Some(email), Some(message)) => (name, email, message),
        _ => return ValidationOutcome::Rejected(Rejection::MissingFields),
    };

    if !is_email_shape(&email) {
        return ValidationOutcome::Rejected(Rejection::InvalidEmail);
    }

    if raw.is_filled(HONEYPOT_FIELD) {
        return ValidationOutcome::Honeypot;
    }

    let name = sanitize_line(&name, NAME_MAX_CHARS);
    let email = sanitize_line(&email, EMAIL_MAX_CHARS);
    let message = sanitize_message(&message, MESSAGE_MAX_CHARS);
    let subject = raw
        .text("subject")
        .map(|s| sanitize_line(&s, SUBJECT_MAX_CHARS))
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_SUBJECT.to_string());

    if name.is_empty() || email.is_empty() || message.is_empty() {
        return ValidationOutcome::Rejected(Rejection::InvalidInput);
    }

    ValidationOutcome::Accepted(CleanSubmission {
        name,
        email,
        subject,
        message,
    })
}
