//! Landing page.

use axum::{extract::State, response::Response};
use serde::Serialize;

use scribe_core::PageKind;

use super::Banner;
use crate::state::AppState;

#[derive(Serialize)]
struct StepLink {
    name: &'static str,
    href: &'static str,
    summary: &'static str,
    runs_on_open: bool,
}

impl StepLink {
    fn new(kind: PageKind) -> Self {
        let (name, href, summary) = match kind {
            PageKind::Research => ("Research", "/research", "build SEO briefs for a topic."),
            PageKind::Writing => ("Writing", "/writing", "turn the latest brief into an article."),
            PageKind::Branding => (
                "Branding",
                "/branding",
                "score the article against the brand and rewrite it.",
            ),
        };
        Self {
            name,
            href,
            summary,
            runs_on_open: kind.runs_on_open(),
        }
    }
}

#[derive(Serialize)]
struct HomeView<'a> {
    title: &'static str,
    backend_url: &'a str,
    steps: Vec<StepLink>,
    #[serde(flatten)]
    banner: Banner,
}

/// GET / - Links to the workflow steps.
pub async fn index(State(state): State<AppState>) -> Response {
    let view = HomeView {
        title: "Content Workflow",
        backend_url: state.backend.base_url(),
        steps: [PageKind::Research, PageKind::Writing, PageKind::Branding]
            .into_iter()
            .map(StepLink::new)
            .collect(),
        banner: Banner::default(),
    };
    super::render(&state, "home.html", &view)
}
