// SPDX-License-Identifier: PMPL-1.0-or-later
//! Known shapes of backend error bodies.
//!
//! The backend reports failures in a handful of JSON layouts. [`ErrorBody`]
//! names each of them so the normalizer can match exhaustively instead of
//! poking at untyped JSON. Parsing is total: anything unrecognised lands in
//! a fallback variant.

use serde_json::Value;

/// Parsed body of a failed HTTP response.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorBody {
    /// `{"errors": [...]}`, typically validation failures.
    Errors(Vec<String>),
    /// `{"detail": ...}`.
    Detail(String),
    /// `{"message": "..."}`.
    Message(String),
    /// Valid JSON in a shape not listed above.
    Other(Value),
    /// Non-JSON text.
    Text(String),
    /// No body, or only whitespace.
    Empty,
}

impl ErrorBody {
    /// Classify raw response bytes.
    pub fn parse(bytes: &[u8]) -> Self {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return ErrorBody::Empty;
        }
        match serde_json::from_slice::<Value>(bytes) {
            Ok(value) => Self::from_value(value),
            Err(_) => ErrorBody::Text(String::from_utf8_lossy(bytes).trim().to_string()),
        }
    }

    /// Classify an already-decoded JSON value.
    pub fn from_value(value: Value) -> Self {
        let map = match value {
            Value::Object(map) => map,
            other => return ErrorBody::Other(other),
        };

        match map.get("errors") {
            Some(Value::Array(items)) if !items.is_empty() => {
                return ErrorBody::Errors(items.iter().map(render).collect());
            }
            _ => {}
        }
        if let Some(detail) = map.get("detail") {
            return ErrorBody::Detail(render(detail));
        }
        if let Some(Value::String(message)) = map.get("message") {
            return ErrorBody::Message(message.clone());
        }
        ErrorBody::Other(Value::Object(map))
    }

    /// Upstream detail suitable for appending to an error description.
    ///
    /// Returns `None` when the body carries nothing worth showing.
    pub fn detail(&self) -> Option<String> {
        let detail = match self {
            ErrorBody::Errors(items) => items
                .iter()
                .map(String::as_str)
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join(", "),
            ErrorBody::Detail(detail) => detail.clone(),
            ErrorBody::Message(message) => message.clone(),
            ErrorBody::Other(value) => match value {
                Value::Null => String::new(),
                Value::Object(map) if map.is_empty() => String::new(),
                other => other.to_string(),
            },
            ErrorBody::Text(text) => text.clone(),
            ErrorBody::Empty => String::new(),
        };
        let detail = detail.trim();
        (!detail.is_empty()).then(|| detail.to_string())
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
