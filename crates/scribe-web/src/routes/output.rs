//! Output relays: refine, save and the persisted article.

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use serde_json::Value;

use crate::error::{RelayError, Step};
use crate::extract::read_multipart;
use crate::relay;
use crate::state::AppState;

/// POST /api/refine-output - Refine the current output with a suggestion.
pub async fn refine_output(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<Value>, RelayError> {
    let fields = read_multipart(multipart)
        .await
        .map_err(|e| RelayError::new(Step::Refine, e))?;

    let body = relay::refine_output(&state.backend, fields.get("suggestion")).await?;
    Ok(Json(body))
}

/// POST /api/save-output - Ask the backend to persist the current output.
pub async fn save_output(State(state): State<AppState>) -> Result<Json<Value>, RelayError> {
    Ok(Json(relay::save_output(&state.backend).await?))
}

/// GET /api/article-output - The persisted article, or `not-found`.
pub async fn article_output(State(state): State<AppState>) -> Result<Json<Value>, RelayError> {
    Ok(Json(relay::fetch_article(&state.backend).await?))
}
