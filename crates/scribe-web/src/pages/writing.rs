//! Writing page.
//!
//! Opening the page writes an article from the persisted research brief.
//! Posting the page re-runs the writer with a suggestion.

use axum::{
    extract::{Form, State},
    response::Response,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use scribe_core::model::{resource_link, Article};
use scribe_core::page::suggestion_enabled;
use scribe_core::{envelope, normalize_brief, PageKind, PageState};

use super::{markdown, open_page, Banner};
use crate::relay::{self, StoredBriefs};
use crate::state::AppState;

const NO_BRIEF: &str = "No research brief found. Run research first.";

/// What one writing run produced.
#[derive(Debug)]
struct WritingOutcome {
    article: Option<Article>,
    raw: Value,
}

#[derive(Debug, Serialize)]
struct KeywordView {
    text: String,
    link: String,
}

#[derive(Debug, Default, Serialize)]
struct WritingView {
    #[serde(flatten)]
    banner: Banner,
    topic: Option<String>,
    primary_keyword: Option<KeywordView>,
    secondary_keywords: Vec<String>,
    article_html: Option<String>,
    article_markdown: Option<String>,
    last_response: Option<String>,
    suggestion: String,
}

impl WritingView {
    fn new(state: &PageState<WritingOutcome>, suggestion: String) -> Self {
        let mut view = WritingView {
            banner: Banner::from_state(state),
            suggestion,
            ..Default::default()
        };

        let Some(outcome) = state.payload() else {
            return view;
        };

        match &outcome.article {
            Some(article) => {
                view.topic = article.topic.clone();
                view.primary_keyword = article.primary_keyword.as_ref().map(|k| KeywordView {
                    text: k.clone(),
                    link: resource_link(k),
                });
                view.secondary_keywords = article.secondary_keywords.clone();
                view.article_html = Some(markdown::to_html(&article.article));
                view.article_markdown = Some(article.article.clone());
            }
            None => {
                view.last_response = serde_json::to_string_pretty(&outcome.raw).ok();
            }
        }
        view
    }
}

#[derive(Debug, Deserialize)]
pub struct RerunForm {
    #[serde(default)]
    pub suggestion: Option<String>,
}

/// GET /writing - Write an article from the persisted brief.
pub async fn show(State(state): State<AppState>) -> Response {
    let page = open_page(PageKind::Writing, || run(&state, None)).await;
    super::render(&state, "writing.html", &WritingView::new(&page, String::new()))
}

/// POST /writing - Re-run the writer with a suggestion.
pub async fn submit(State(state): State<AppState>, Form(form): Form<RerunForm>) -> Response {
    let suggestion = form.suggestion.unwrap_or_default();
    let hint = suggestion_enabled(Some(&suggestion)).then_some(suggestion.as_str());
    let page = run(&state, hint).await;
    super::render(&state, "writing.html", &WritingView::new(&page, suggestion))
}

async fn run(state: &AppState, suggestion: Option<&str>) -> PageState<WritingOutcome> {
    let mut page = PageState::submitting();

    match write_article(state, suggestion).await {
        Ok(outcome) => {
            let message = if outcome.article.is_some() {
                "Article generated"
            } else {
                ""
            };
            page.succeed(outcome, message);
        }
        Err(error) => page.fail(error),
    }
    page
}

async fn write_article(
    state: &AppState,
    suggestion: Option<&str>,
) -> Result<WritingOutcome, String> {
    let stored = relay::fetch_research(&state.backend)
        .await
        .map_err(|e| e.to_string())?;

    let body = match stored {
        StoredBriefs::Found(body) => envelope::interpret(body)?,
        StoredBriefs::Missing => return Err(NO_BRIEF.to_string()),
    };

    let brief = normalize_brief(&body).map_err(|_| NO_BRIEF.to_string())?;
    debug!(source = ?brief.source, "Normalized research brief");
    let brief_json = brief.to_json_string().map_err(|e| e.to_string())?;

    let raw = relay::run_writing(&state.backend, &brief_json, suggestion)
        .await
        .map_err(|e| e.to_string())
        .and_then(envelope::interpret)?;

    let article = Article::from_response(&raw);
    info!(has_article = article.is_some(), "Writing agent finished");
    Ok(WritingOutcome { article, raw })
}
