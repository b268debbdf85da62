//! Research agent relay.

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

use crate::error::{RelayError, Step};
use crate::extract::read_multipart;
use crate::relay::{self, StoredBriefs};
use crate::state::AppState;

/// POST /api/research-agent - Run research with the submitted form.
pub async fn run_research(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<Value>, RelayError> {
    let fields = read_multipart(multipart)
        .await
        .map_err(|e| RelayError::new(Step::Research, e))?;

    let body = relay::run_research(&state.backend, fields.into_research_request()).await?;
    Ok(Json(body))
}

/// GET /api/research-agent - Persisted research briefs.
pub async fn fetch_briefs(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Value>), RelayError> {
    Ok(match relay::fetch_research(&state.backend).await? {
        StoredBriefs::Found(body) => (StatusCode::OK, Json(body)),
        StoredBriefs::Missing => (StatusCode::NOT_FOUND, Json(relay::missing_briefs_body())),
    })
}
