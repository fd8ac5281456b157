//! Submission records and validation outcomes.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::submission::sanitize::utf16_len;

/// Subject used when the submitter leaves the field blank.
pub const DEFAULT_SUBJECT: &str = "No subject";

/// Untyped bag of fields exactly as received from the form.
///
/// Nothing about the contents is trusted. Fields may be missing, empty,
/// or of the wrong JSON type.
#[derive(Debug, Clone, Default)]
pub struct RawSubmission {
    fields: Map<String, Value>,
    serialized_len: usize,
}

impl RawSubmission {
    /// Build from a raw request body.
    ///
    /// A body that is not JSON, or is JSON but not an object, yields an empty
    /// bag; its size is still measured so the size guard sees it.
    pub fn from_body(body: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(body) {
            Ok(value) => Self::from(value),
            Err(_) => Self {
                fields: Map::new(),
                serialized_len: utf16_len(&String::from_utf8_lossy(body)),
            },
        }
    }

    /// Length in UTF-16 code units of the submission serialized back to JSON.
    pub fn serialized_len(&self) -> usize {
        self.serialized_len
    }

    /// Textual value of a field.
    ///
    /// Strings are taken as-is, numbers use their decimal text and booleans
    /// become `"true"`/`"false"`. `null`, arrays and objects count as absent.
    pub fn text(&self, key: &str) -> Option<String> {
        match self.fields.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// Textual value of a field that [is filled](RawSubmission::is_filled).
    pub fn non_empty_text(&self, key: &str) -> Option<String> {
        if self.is_filled(key) {
            self.text(key)
        } else {
            None
        }
    }

    /// Whether a field holds a truthy value.
    ///
    /// Missing, `null`, `false`, `0` and `""` are empty. Anything else,
    /// including `true`, non-zero numbers, arrays and objects, is filled.
    pub fn is_filled(&self, key: &str) -> bool {
        match self.fields.get(key) {
            None | Some(Value::Null) | Some(Value::Bool(false)) => false,
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Number(n)) => n.as_f64().map_or(true, |f| f != 0.0),
            Some(_) => true,
        }
    }
}

impl From<Value> for RawSubmission {
    fn from(value: Value) -> Self {
        let serialized_len = serde_json::to_string(&value)
            .map(|s| utf16_len(&s))
            .unwrap_or(0);
        let fields = match value {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Self { fields, serialized_len }
    }
}

/// A submission that passed every guard and is safe to embed in Markdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CleanSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl CleanSubmission {
    /// Whether the subject is the fallback sentinel rather than user text.
    pub fn has_default_subject(&self) -> bool {
        self.subject == DEFAULT_SUBJECT
    }
}

/// Why a submission was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Serialized submission exceeds the configured ceiling.
    PayloadTooLarge,
    /// `name`, `email` or `message` absent or empty.
    MissingFields,
    /// `email` does not have the `local@domain.tld` shape.
    InvalidEmail,
    /// A required field became empty once markup characters were stripped.
    InvalidInput,
}

impl Rejection {
    /// HTTP status reported to the submitter.
    pub fn status(self) -> u16 {
        match self {
            Rejection::PayloadTooLarge => 413,
            Rejection::MissingFields | Rejection::InvalidEmail | Rejection::InvalidInput => 400,
        }
    }

    /// Public, deliberately generic message.
    pub fn message(self) -> &'static str {
        match self {
            Rejection::PayloadTooLarge => "Payload too large",
            Rejection::MissingFields => "Missing required fields",
            Rejection::InvalidEmail => "Invalid email format",
            Rejection::InvalidInput => "Invalid input",
        }
    }

    /// Stable label for logs and metrics.
    pub fn as_str(self) -> &'static str {
        match self {
            Rejection::PayloadTooLarge => "payload_too_large",
            Rejection::MissingFields => "missing_fields",
            Rejection::InvalidEmail => "invalid_email",
            Rejection::InvalidInput => "invalid_input",
        }
    }
}

/// Result of running a [`RawSubmission`] through the guards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Accepted(CleanSubmission),
    /// Honeypot was filled. Report success, forward nothing.
    Honeypot,
    Rejected(Rejection),
}
