//! Research page.
//!
//! Shows the research form and, after a submission, the briefs the agent
//! returned. Never runs on open.

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    response::Response,
};
use serde::Serialize;
use tracing::warn;

use scribe_core::model::{display_value, ContentGoal, ResearchBrief, ResearchRequest, MAX_BLOG_COUNT};
use scribe_core::{brief_list, envelope, PageKind, PageState};

use super::{open_page, Banner};
use crate::extract::read_multipart;
use crate::relay;
use crate::state::AppState;

/// Sticky form values.
#[derive(Debug, Serialize)]
struct FormValues {
    topic: String,
    target_audience: String,
    content_goal: String,
    brand: String,
    region: String,
    blog_count: String,
}

impl FormValues {
    fn from_request(request: &ResearchRequest) -> Self {
        let value = |v: &Option<String>| v.clone().unwrap_or_default();
        Self {
            topic: value(&request.topic),
            target_audience: value(&request.target_audience),
            content_goal: value(&request.content_goal),
            brand: value(&request.brand),
            region: value(&request.region),
            blog_count: request.blog_count().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct BriefView {
    blog_number: String,
    blog_angle: String,
    primary_keyword: String,
    keyword_link: Option<String>,
    secondary_keywords: String,
    question_keywords: String,
    content_angle: String,
    recommended_structure: String,
    recommended_word_count: String,
    ranking_feasibility: String,
    writing_instructions: String,
}

impl BriefView {
    fn from_brief(brief: &ResearchBrief) -> Self {
        Self {
            blog_number: display_value(&brief.blog_number),
            blog_angle: display_value(&brief.blog_angle),
            primary_keyword: brief.primary_keyword.clone().unwrap_or_default(),
            keyword_link: brief.primary_keyword_link(),
            secondary_keywords: brief.secondary_keywords.join(", "),
            question_keywords: brief.question_keywords.join(", "),
            content_angle: brief.content_angle.clone().unwrap_or_default(),
            recommended_structure: display_value(&brief.recommended_structure),
            recommended_word_count: display_value(&brief.recommended_word_count),
            ranking_feasibility: brief.ranking_feasibility.clone().unwrap_or_default(),
            writing_instructions: brief.writing_instructions.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ResearchView {
    form: FormValues,
    goals: Vec<&'static str>,
    counts: Vec<u8>,
    required: &'static [&'static str],
    #[serde(flatten)]
    banner: Banner,
    briefs: Vec<BriefView>,
}

impl ResearchView {
    fn new(request: &ResearchRequest, state: &PageState<Vec<ResearchBrief>>) -> Self {
        Self {
            form: FormValues::from_request(request),
            goals: ContentGoal::ALL.iter().map(ContentGoal::as_str).collect(),
            counts: (1..=MAX_BLOG_COUNT).collect(),
            required: PageKind::Research.required_fields(),
            banner: Banner::from_state(state),
            briefs: state
                .payload()
                .map(|briefs| briefs.iter().map(BriefView::from_brief).collect())
                .unwrap_or_default(),
        }
    }
}

/// GET /research - Empty form with the default values.
pub async fn show(State(state): State<AppState>) -> Response {
    let request = ResearchRequest::page_defaults();
    let page = open_page(PageKind::Research, || run(&state, &request)).await;
    super::render(&state, "research.html", &ResearchView::new(&request, &page))
}

/// POST /research - Run the research agent and list the briefs.
pub async fn submit(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let request = match read_multipart(multipart).await {
        Ok(fields) => fields.into_research_request(),
        Err(e) => {
            warn!(error = %e, "Research form rejected");
            let mut page = PageState::Idle;
            page.fail(e.to_string());
            let view = ResearchView::new(&ResearchRequest::page_defaults(), &page);
            return super::render(&state, "research.html", &view);
        }
    };

    let page = run(&state, &request).await;
    super::render(&state, "research.html", &ResearchView::new(&request, &page))
}

async fn run(state: &AppState, request: &ResearchRequest) -> PageState<Vec<ResearchBrief>> {
    let mut page = PageState::submitting();

    let outcome = relay::run_research(&state.backend, request.clone())
        .await
        .map_err(|e| e.to_string())
        .and_then(envelope::interpret);

    match outcome {
        Ok(body) => {
            let message = envelope::message(&body)
                .unwrap_or("Research complete")
                .to_string();
            page.succeed(brief_list(&body), message);
        }
        Err(error) => page.fail(error),
    }
    page
}
