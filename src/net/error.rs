#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

const GENERIC_MESSAGE: &str = "Something went wrong. Please try again.";

/// Errors produced by the HTTP client adapter.
///
/// Every variant is terminal for the user action that triggered it; there
/// are no retries. `Unauthorized` is raised after the adapter has already
/// forced a logout, so callers usually let the redirect speak for itself.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-2xx status.
    #[error("request failed with status {status}")]
    Api {
        status: u16,
        message: Option<String>,
    },
    /// The backend answered 401; the session has been cleared.
    #[error("session expired")]
    Unauthorized,
    /// The response body did not match the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Stub error for native (non-browser) builds, where no HTTP stack
    /// exists.
    #[cfg(not(target_arch = "wasm32"))]
    pub(crate) fn unavailable() -> Self {
        Self::Network("not available outside the browser".to_owned())
    }

    /// The message a form shows at its root: the backend-provided message
    /// when there is one, a generic fallback otherwise.
    pub fn form_message(&self) -> String {
        match self {
            Self::Api {
                message: Some(message),
                ..
            } => message.clone(),
            Self::Unauthorized => "Your session has expired. Please sign in again.".to_owned(),
            _ => GENERIC_MESSAGE.to_owned(),
        }
    }
}

/// Extract a human-readable message from a backend error body.
///
/// Prefers the `message` field, then `error`; returns `None` for bodies
/// that carry neither or are not JSON.
pub fn error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    for key in ["message", "error"] {
        if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
            if !text.trim().is_empty() {
                return Some(text.to_owned());
            }
        }
    }
    None
}
