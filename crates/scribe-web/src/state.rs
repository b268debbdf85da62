//! Application state.

use scribe_client::BackendClient;
use std::sync::Arc;
use tera::Tera;

use crate::pages::templates;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<BackendClient>,
    pub templates: Arc<Tera>,
}

impl AppState {
    pub fn new(backend: BackendClient) -> anyhow::Result<Self> {
        Ok(Self {
            backend: Arc::new(backend),
            templates: Arc::new(templates::load()?),
        })
    }
}
