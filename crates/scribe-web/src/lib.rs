//! Scribe Web Server
//!
//! Axum relay in front of the content agents backend, plus the workflow pages.

pub mod error;
pub mod extract;
pub mod pages;
pub mod relay;
pub mod routes;
pub mod state;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use scribe_client::{BackendClient, BackendConfig};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub use error::{RelayError, Step};
pub use state::AppState;

/// Largest accepted request body (research uploads included).
pub const MAX_BODY_BYTES: usize = 20 * 1024 * 1024;

/// Address the relay listens on.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        // Agents
        .route(
            "/research-agent",
            get(routes::research::fetch_briefs).post(routes::research::run_research),
        )
        .route("/writing-agent", post(routes::writing::run_writing))
        .route("/branding-agent", post(routes::branding::run_branding))
        // Output
        .route("/refine-output", post(routes::output::refine_output))
        .route("/save-output", post(routes::output::save_output))
        .route("/article-output", get(routes::output::article_output))
        .route("/health", get(routes::health::health))
        .with_state(state.clone());

    let page_routes = Router::new()
        .route("/", get(pages::home::index))
        .route("/research", get(pages::research::show).post(pages::research::submit))
        .route("/writing", get(pages::writing::show).post(pages::writing::submit))
        .route("/branding", get(pages::branding::show).post(pages::branding::submit))
        .route("/branding/saved", get(pages::branding::saved))
        .route("/download", post(pages::download::download))
        .with_state(state.clone());

    Router::new()
        .nest("/api", api_routes)
        .merge(page_routes)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the web server.
pub async fn run_server(server: ServerConfig, backend: BackendConfig) -> anyhow::Result<()> {
    let backend_url = backend.base_url.clone();
    let state = AppState::new(BackendClient::new(backend)?)?;
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(server.addr()).await?;
    tracing::info!(backend = %backend_url, "Web server listening on http://{}", server.addr());

    axum::serve(listener, app).await?;
    Ok(())
}
