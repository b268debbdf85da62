//! Health check.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use tracing::warn;

use scribe_client::Endpoint;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct BackendHealth {
    pub url: String,
    pub reachable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub backend: BackendHealth,
}

/// GET /api/health - Relay status plus backend reachability.
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let url = state.backend.base_url().to_string();
    let (status, backend) = match state.backend.get(Endpoint::Health).await {
        Ok(_) => (
            StatusCode::OK,
            BackendHealth {
                url,
                reachable: true,
                error: None,
            },
        ),
        Err(e) => {
            warn!(error = %e, "Backend health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                BackendHealth {
                    url,
                    reachable: false,
                    error: Some(e.to_string()),
                },
            )
        }
    };

    let label = if backend.reachable { "ok" } else { "degraded" };
    (
        status,
        Json(HealthResponse {
            status: label,
            version: env!("CARGO_PKG_VERSION"),
            backend,
        }),
    )
}
