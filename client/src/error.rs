//! Client error taxonomy and backend field-error extraction.
//!
//! ERROR HANDLING
//! ==============
//! Transport code produces `NetworkFailure`, `Rejected`, or `Decode`. The
//! session store narrows `Rejected` into `AuthenticationFailed` for login and
//! registration, and reconciliation collapses everything into
//! `SessionInvalid`, which is never shown to the user.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::collections::BTreeMap;

pub const NETWORK_FAILURE_MESSAGE: &str = "Network error. Please check your connection and try again.";

/// Field lookup order used when picking the message to display.
const FIELD_PRIORITY: [&str; 6] = ["email", "username", "password", "message", "detail", "non_field_errors"];

/// Field-level validation messages returned by the backend.
///
/// Bodies look like `{"password": ["Incorrect password"]}` or
/// `{"detail": "Not found."}`; both list and scalar values are accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn from_value(value: &serde_json::Value) -> Self {
        let mut fields = BTreeMap::new();
        if let Some(map) = value.as_object() {
            for (key, raw) in map {
                let messages = messages_of(raw);
                if !messages.is_empty() {
                    fields.insert(key.clone(), messages);
                }
            }
        }
        Self(fields)
    }

    /// Parse a raw response body. Non-JSON bodies yield no field errors.
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str::<serde_json::Value>(body)
            .map(|value| Self::from_value(&value))
            .unwrap_or_default()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(|m| m.first()).map(String::as_str)
    }

    /// First message in display priority, then any remaining field.
    pub fn first_message(&self) -> Option<&str> {
        FIELD_PRIORITY
            .iter()
            .find_map(|field| self.get(field))
            .or_else(|| self.0.values().find_map(|m| m.first()).map(String::as_str))
    }
}

fn messages_of(raw: &serde_json::Value) -> Vec<String> {
    match raw {
        serde_json::Value::String(s) => vec![s.clone()],
        serde_json::Value::Array(items) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_owned))
            .collect(),
        _ => Vec::new(),
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClientError {
    #[error("network failure: {0}")]
    NetworkFailure(String),
    #[error("request rejected with status {status}")]
    Rejected { status: u16, fields: FieldErrors },
    #[error("authentication failed")]
    AuthenticationFailed(FieldErrors),
    #[error("no valid session")]
    SessionInvalid,
    #[error("image upload failed: {0}")]
    UploadFailure(String),
    #[error("{0}")]
    Validation(&'static str),
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ClientError {
    /// Narrow a backend rejection into an authentication failure.
    ///
    /// Transport failures pass through unchanged so the form can still show
    /// the retry-able network message.
    #[must_use]
    pub fn into_auth_failure(self) -> Self {
        match self {
            Self::Rejected { fields, .. } => Self::AuthenticationFailed(fields),
            other => other,
        }
    }

    /// Message suitable for a form banner, using `fallback` when the backend
    /// did not say anything specific.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::NetworkFailure(_) => NETWORK_FAILURE_MESSAGE.to_owned(),
            Self::AuthenticationFailed(fields) | Self::Rejected { fields, .. } => {
                fields.first_message().unwrap_or(fallback).to_owned()
            }
            Self::Validation(message) => (*message).to_owned(),
            Self::SessionInvalid | Self::UploadFailure(_) | Self::Decode(_) => fallback.to_owned(),
        }
    }
}
