//! Writing agent relay.

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::error::{RelayError, Step};
use crate::extract::read_multipart;
use crate::relay;
use crate::state::AppState;

/// POST /api/writing-agent - Write an article from a brief.
///
/// Expects a multipart form with `brief` (a JSON string) and an optional
/// `suggestion`.
pub async fn run_writing(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response, RelayError> {
    let fields = read_multipart(multipart)
        .await
        .map_err(|e| RelayError::new(Step::Writing, e))?;

    let Some(brief) = fields.get("brief").filter(|b| !b.is_empty()) else {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Brief is required" })),
        )
            .into_response());
    };

    let body = relay::run_writing(&state.backend, brief, fields.get("suggestion")).await?;
    Ok(Json(body).into_response())
}
