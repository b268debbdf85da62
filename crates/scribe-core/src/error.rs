//! Centralized error types for Scribe.

use serde_json::Value;
use thiserror::Error;

/// Main error type for Scribe operations.
#[derive(Error, Debug)]
pub enum ScribeError {
    #[error("Backend unreachable: {0}")]
    BackendUnreachable(String),

    #[error("Backend error ({status}): {}", detail_text(.body))]
    BackendError { status: u16, body: Value },

    #[error("Malformed backend response: {reason}")]
    MalformedResponse { reason: String, raw: String },

    #[error("Research brief not found in backend response")]
    BriefNotFound,

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for Scribe operations.
pub type ScribeResult<T> = Result<T, ScribeError>;

impl ScribeError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// The backend-supplied error detail, forwarded verbatim.
    ///
    /// For `BackendError` this is the `detail`, `error` or `message` field of the
    /// body when one exists, otherwise the whole body. Every other variant
    /// yields its display text.
    pub fn detail(&self) -> Value {
        match self {
            Self::BackendError { body, .. } => backend_detail(body).clone(),
            other => Value::String(other.to_string()),
        }
    }
}

/// Pick the most specific error field out of a backend error body.
pub fn backend_detail(body: &Value) -> &Value {
    ["detail", "error", "message"]
        .iter()
        .find_map(|key| body.get(*key).filter(|v| !v.is_null()))
        .unwrap_or(body)
}

fn detail_text(body: &Value) -> String {
    match backend_detail(body) {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
