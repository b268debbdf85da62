//! Branding agent relay.

use axum::{body::Bytes, extract::State, Json};
use serde::Deserialize;
use serde_json::Value;

use crate::error::{RelayError, Step};
use crate::relay;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct BrandingRequest {
    #[serde(default)]
    pub suggestion: Option<String>,
}

impl BrandingRequest {
    /// Parse an optional JSON body. An empty body means no suggestion.
    pub fn from_body(body: &[u8]) -> Result<Self, serde_json::Error> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(body)
    }
}

/// POST /api/branding-agent - Score and brand the current article.
pub async fn run_branding(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Value>, RelayError> {
    let request =
        BrandingRequest::from_body(&body).map_err(|e| RelayError::new(Step::Branding, e.into()))?;

    let body = relay::run_branding(&state.backend, request.suggestion.as_deref()).await?;
    Ok(Json(body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_has_no_suggestion() {
        assert!(BrandingRequest::from_body(b"").unwrap().suggestion.is_none());
        assert!(BrandingRequest::from_body(b"  \n").unwrap().suggestion.is_none());
        assert!(BrandingRequest::from_body(b"{}").unwrap().suggestion.is_none());
    }

    #[test]
    fn test_suggestion_parsed() {
        let request = BrandingRequest::from_body(br#"{"suggestion": "less formal"}"#).unwrap();
        assert_eq!(request.suggestion.as_deref(), Some("less formal"));
    }

    #[test]
    fn test_invalid_json_rejected() {
        assert!(BrandingRequest::from_body(b"{oops").is_err());
    }
}
