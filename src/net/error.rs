//! Tagged failure type for backend calls.
//!
//! ERROR HANDLING
//! ==============
//! Every REST helper returns `Result<_, ApiError>`; nothing throws across the
//! page boundary. `Transport` separates unreachable/undecodable from an
//! explicit backend rejection, so pages can choose between a retry prompt and
//! field-level messages.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::collections::BTreeMap;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiError {
    /// Network failure or undecodable response.
    Transport(String),
    /// Backend rejected the request with a single message.
    Message(String),
    /// Backend rejected the request with per-field validation messages.
    Fields(BTreeMap<String, String>),
}

impl ApiError {
    /// One-line summary suitable for an error banner.
    pub fn summary(&self) -> String {
        match self {
            Self::Transport(message) | Self::Message(message) => message.clone(),
            Self::Fields(fields) => fields
                .values()
                .next()
                .cloned()
                .unwrap_or_else(|| "Request rejected.".to_owned()),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}

/// Interpret a non-OK response body.
///
/// The backend answers with either `{"detail": "..."}` or a field → messages
/// map (registration validation, one message list per field). Anything else
/// falls back to `fallback`.
pub fn parse_rejection(body: &str, fallback: &str) -> ApiError {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return ApiError::Message(fallback.to_owned());
    };
    let Some(object) = value.as_object() else {
        return ApiError::Message(fallback.to_owned());
    };
    if let Some(detail) = object.get("detail").and_then(|v| v.as_str()) {
        return ApiError::Message(detail.to_owned());
    }
    let mut fields = BTreeMap::new();
    for (name, messages) in object {
        if let Some(message) = first_message(messages) {
            fields.insert(name.clone(), message);
        }
    }
    if fields.is_empty() {
        ApiError::Message(fallback.to_owned())
    } else {
        ApiError::Fields(fields)
    }
}

fn first_message(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(message) => Some(message.clone()),
        serde_json::Value::Array(items) => items
            .iter()
            .find_map(|item| item.as_str().map(ToOwned::to_owned)),
        _ => None,
    }
}
