//! Relay calls shared by the API routes and the pages.
//!
//! Each function makes exactly one backend call and tags failures with the
//! workflow step.

use serde_json::{json, Value};
use tracing::info;

use scribe_client::{BackendClient, Endpoint, FormPayload};
use scribe_core::model::ResearchRequest;
use scribe_core::ScribeError;

use crate::error::{RelayError, Step};

/// Persisted research briefs, if the backend has any.
#[derive(Debug, Clone, PartialEq)]
pub enum StoredBriefs {
    Found(Value),
    Missing,
}

/// Body returned when no research briefs are persisted yet.
pub fn missing_briefs_body() -> Value {
    json!({"status": "error", "research_briefs": []})
}

/// Body returned when no article is persisted yet.
pub fn missing_article_body() -> Value {
    json!({"status": "not-found"})
}

pub async fn run_research(
    backend: &BackendClient,
    request: ResearchRequest,
) -> Result<Value, RelayError> {
    info!(
        topic = request.topic.as_deref().unwrap_or_default(),
        blog_count = request.blog_count(),
        has_file = request.file.is_some(),
        "Running research agent"
    );
    backend
        .post_form(Endpoint::ResearchAgent, FormPayload::from(request))
        .await
        .map_err(|e| RelayError::new(Step::Research, e))
}

pub async fn fetch_research(backend: &BackendClient) -> Result<StoredBriefs, RelayError> {
    match backend.get(Endpoint::ResearchAgent).await {
        Ok(body) => Ok(StoredBriefs::Found(body)),
        Err(ScribeError::BackendError { status: 404, .. }) => Ok(StoredBriefs::Missing),
        Err(e) => Err(RelayError::new(Step::ResearchBriefs, e)),
    }
}

/// Send a brief (as a JSON string) to the writing agent.
pub async fn run_writing(
    backend: &BackendClient,
    brief: &str,
    suggestion: Option<&str>,
) -> Result<Value, RelayError> {
    info!(brief_bytes = brief.len(), has_suggestion = suggestion.is_some(), "Running writing agent");
    let form = FormPayload::new()
        .text("brief", brief)
        .optional_text("suggestion", non_blank(suggestion));
    backend
        .post_form(Endpoint::WritingAgent, form)
        .await
        .map_err(|e| RelayError::new(Step::Writing, e))
}

pub async fn run_branding(
    backend: &BackendClient,
    suggestion: Option<&str>,
) -> Result<Value, RelayError> {
    let body = match non_blank(suggestion) {
        Some(suggestion) => json!({ "suggestion": suggestion }),
        None => json!({}),
    };
    info!(has_suggestion = body.get("suggestion").is_some(), "Running branding agent");
    backend
        .post_json(Endpoint::BrandingAgent, body)
        .await
        .map_err(|e| RelayError::new(Step::Branding, e))
}

pub async fn refine_output(
    backend: &BackendClient,
    suggestion: Option<&str>,
) -> Result<Value, RelayError> {
    let form = FormPayload::new().optional_text("suggestion", suggestion);
    backend
        .post_form(Endpoint::RefineOutput, form)
        .await
        .map_err(|e| RelayError::new(Step::Refine, e))
}

pub async fn save_output(backend: &BackendClient) -> Result<Value, RelayError> {
    backend
        .post_empty(Endpoint::SaveOutput)
        .await
        .map_err(|e| RelayError::new(Step::Save, e))
}

/// Fetch the persisted article. A backend 404 becomes `{"status":"not-found"}`.
pub async fn fetch_article(backend: &BackendClient) -> Result<Value, RelayError> {
    match backend.get(Endpoint::ArticleOutput).await {
        Ok(body) => Ok(body),
        Err(ScribeError::BackendError { status: 404, .. }) => Ok(missing_article_body()),
        Err(e) => Err(RelayError::new(Step::ArticleOutput, e)),
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
