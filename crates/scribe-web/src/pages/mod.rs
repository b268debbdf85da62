//! Server-rendered workflow pages.
//!
//! Pages call the same relay functions as the JSON routes and keep their view
//! state in a [`PageState`] for the duration of one request.

pub mod branding;
pub mod download;
pub mod home;
pub mod markdown;
pub mod research;
pub mod templates;
pub mod writing;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Serialize;
use std::future::Future;
use tracing::{debug, error};

use scribe_core::{PageKind, PageState};

use crate::state::AppState;

/// Render a template with a serializable view.
pub(crate) fn render<V: Serialize>(state: &AppState, template: &str, view: &V) -> Response {
    let result = tera::Context::from_serialize(view)
        .and_then(|context| state.templates.render(template, &context));

    match result {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!(template, error = ?e, "Failed to render page");
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page").into_response()
        }
    }
}

/// State a page starts with when it is opened: the result of `run` for pages
/// that run on open, idle otherwise.
pub(crate) async fn open_page<T, F, Fut>(kind: PageKind, run: F) -> PageState<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = PageState<T>>,
{
    if kind.runs_on_open() {
        debug!(page = ?kind, "Running page on open");
        run().await
    } else {
        PageState::Idle
    }
}

/// Status lines shared by every page view.
#[derive(Debug, Default, Serialize)]
pub(crate) struct Banner {
    pub error: Option<String>,
    pub message: Option<String>,
}

impl Banner {
    pub fn from_state<T>(state: &PageState<T>) -> Self {
        Self {
            error: state.error().map(str::to_string),
            message: state.message().map(str::to_string),
        }
    }
}
