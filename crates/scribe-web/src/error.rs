//! Relay failures and their HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;
use tracing::error;

use scribe_core::ScribeError;

/// The workflow step a relay call belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Research,
    ResearchBriefs,
    Writing,
    Branding,
    Refine,
    Save,
    ArticleOutput,
}

impl Step {
    /// Fixed headline used in failure bodies.
    pub fn failure_message(&self) -> &'static str {
        match self {
            Step::Research => "Failed to run research agent",
            Step::ResearchBriefs => "Failed to fetch research briefs",
            Step::Writing => "Failed to run writing agent",
            Step::Branding => "Failed to run branding agent",
            Step::Refine => "Failed to refine output",
            Step::Save => "Failed to save output",
            Step::ArticleOutput => "Failed to fetch article",
        }
    }
}

/// A failed relay call.
#[derive(Debug, Error)]
#[error("{}: {source}", .step.failure_message())]
pub struct RelayError {
    pub step: Step,
    #[source]
    pub source: ScribeError,
}

impl RelayError {
    pub fn new(step: Step, source: ScribeError) -> Self {
        Self { step, source }
    }

    /// HTTP status forwarded to the browser.
    ///
    /// Backend errors keep the backend's status, malformed backend bodies are
    /// a gateway error and everything else is a 500.
    pub fn status(&self) -> StatusCode {
        match &self.source {
            ScribeError::BackendError { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            ScribeError::MalformedResponse { .. } => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// JSON failure body: `{error, details}`, plus `raw` for malformed bodies.
    pub fn body(&self) -> Value {
        let mut body = json!({
            "error": self.step.failure_message(),
            "details": self.source.detail(),
        });
        match &self.source {
            ScribeError::MalformedResponse { reason, raw } => {
                body["details"] = json!(format!("Malformed backend response: {}", reason));
                body["raw"] = json!(raw);
            }
            ScribeError::BackendError { status, .. } => {
                body["status"] = json!(status);
            }
            _ => {}
        }
        body
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status();
        error!(step = ?self.step, status = status.as_u16(), error = %self.source, "Relay call failed");
        (status, Json(self.body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreachable_is_500_with_details() {
        let err = RelayError::new(
            Step::Writing,
            ScribeError::BackendUnreachable("connection refused".into()),
        );
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = err.body();
        assert_eq!(body["error"], "Failed to run writing agent");
        assert!(body["details"].as_str().unwrap().contains("connection refused"));
    }

    #[test]
    fn test_backend_status_forwarded() {
        let err = RelayError::new(
            Step::Writing,
            ScribeError::BackendError {
                status: 422,
                body: json!({"detail": "brief missing"}),
            },
        );
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.body()["details"], "brief missing");
        assert_eq!(err.body()["status"], 422);
    }

    #[test]
    fn test_invalid_backend_status_is_gateway_error() {
        let err = RelayError::new(
            Step::Branding,
            ScribeError::BackendError {
                status: 42,
                body: json!("odd"),
            },
        );
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_malformed_is_502_with_raw() {
        let err = RelayError::new(
            Step::Branding,
            ScribeError::MalformedResponse {
                reason: "expected value at line 1 column 1".into(),
                raw: "<html>".into(),
            },
        );
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(err.body()["raw"], "<html>");
    }

    #[test]
    fn test_display_includes_step() {
        let err = RelayError::new(Step::Save, ScribeError::BackendUnreachable("down".into()));
        assert_eq!(err.to_string(), "Failed to save output: Backend unreachable: down");
    }
}
