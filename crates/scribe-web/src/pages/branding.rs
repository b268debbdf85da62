//! Branding page.
//!
//! Opening the page scores and brands the current article. Low scores offer a
//! rewrite with a suggestion; any article can be downloaded.

use axum::{
    extract::{Form, State},
    response::Response,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use scribe_core::model::{ArticleOutput, BrandScore, BrandingResult, ScoreBand};
use scribe_core::page::suggestion_enabled;
use scribe_core::{envelope, BrandingActions, PageKind, PageState};

use super::{markdown, open_page, Banner};
use crate::relay;
use crate::state::AppState;

#[derive(Debug, Serialize)]
struct BreakdownRow {
    label: String,
    value: f64,
}

#[derive(Debug, Serialize)]
struct ScoreView {
    overall: Option<f64>,
    band: Option<ScoreBand>,
    breakdown: Vec<BreakdownRow>,
    issues: Vec<String>,
}

impl ScoreView {
    fn from_score(score: &BrandScore) -> Self {
        Self {
            overall: score.overall_score,
            band: score.band(),
            breakdown: score
                .labelled_breakdown()
                .into_iter()
                .map(|(label, value)| BreakdownRow { label, value })
                .collect(),
            issues: score.issues.clone(),
        }
    }
}

#[derive(Debug, Default, Serialize)]
struct BrandingView {
    #[serde(flatten)]
    banner: Banner,
    score: Option<ScoreView>,
    initial_score: Option<f64>,
    final_score: Option<f64>,
    actions: BrandingActions,
    article_html: Option<String>,
    article_markdown: Option<String>,
    suggestion: String,
}

impl BrandingView {
    fn new(state: &PageState<BrandingResult>, suggestion: String) -> Self {
        let mut view = BrandingView {
            banner: Banner::from_state(state),
            suggestion,
            ..Default::default()
        };

        let Some(result) = state.payload() else {
            return view;
        };

        let has_article = !result.article.is_empty();
        view.actions = BrandingActions::for_score(result.brand_score.as_ref(), has_article);
        view.score = result.brand_score.as_ref().map(ScoreView::from_score);
        if result.was_rewritten() {
            view.initial_score = result.initial_score;
            view.final_score = result.final_score;
        }
        if has_article {
            view.article_html = Some(markdown::to_html(&result.article));
            view.article_markdown = Some(result.article.clone());
        }
        view
    }
}

#[derive(Debug, Deserialize)]
pub struct RewriteForm {
    #[serde(default)]
    pub suggestion: Option<String>,
}

/// GET /branding - Score and brand the current article.
pub async fn show(State(state): State<AppState>) -> Response {
    let page = open_page(PageKind::Branding, || run(&state, None)).await;
    super::render(&state, "branding.html", &BrandingView::new(&page, String::new()))
}

/// POST /branding - Rewrite the article with a suggestion.
pub async fn submit(State(state): State<AppState>, Form(form): Form<RewriteForm>) -> Response {
    let suggestion = form.suggestion.unwrap_or_default();

    let page = if suggestion_enabled(Some(&suggestion)) {
        run(&state, Some(&suggestion)).await
    } else {
        let mut page = PageState::Idle;
        page.fail("Enter a suggestion to rewrite the article");
        page
    };

    super::render(&state, "branding.html", &BrandingView::new(&page, suggestion))
}

/// GET /branding/saved - Reload the persisted article without rescoring.
pub async fn saved(State(state): State<AppState>) -> Response {
    let mut page = PageState::submitting();

    let outcome = relay::fetch_article(&state.backend)
        .await
        .map(|body| ArticleOutput::from_response(&body))
        .map_err(|e| e.to_string());

    match outcome {
        Ok(output) => match output.article() {
            Some(article) => page.succeed(
                BrandingResult {
                    article: article.to_string(),
                    ..Default::default()
                },
                "Loaded saved article",
            ),
            None => page.fail("No saved article found"),
        },
        Err(error) => page.fail(error),
    }

    super::render(&state, "branding.html", &BrandingView::new(&page, String::new()))
}

async fn run(state: &AppState, suggestion: Option<&str>) -> PageState<BrandingResult> {
    let mut page = PageState::submitting();

    let outcome = relay::run_branding(&state.backend, suggestion)
        .await
        .map_err(|e| e.to_string())
        .and_then(envelope::interpret)
        .and_then(parse_result);

    match outcome {
        Ok(result) => {
            info!(
                score = ?result.brand_score.as_ref().and_then(|s| s.overall_score),
                rewritten = result.was_rewritten(),
                "Branding agent finished"
            );
            let message = completion_message(&result);
            page.succeed(result, message);
        }
        Err(error) => page.fail(error),
    }
    page
}

fn parse_result(body: Value) -> Result<BrandingResult, String> {
    BrandingResult::from_response(&body)
        .ok_or_else(|| format!("Unexpected branding response: {}", body))
}

fn completion_message(result: &BrandingResult) -> &'static str {
    if result.was_rewritten() {
        "Article rewritten"
    } else {
        "Branding complete"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn view_for(body: Value) -> BrandingView {
        let mut page = PageState::Idle;
        page.succeed(parse_result(body).unwrap(), "ok");
        BrandingView::new(&page, String::new())
    }

    #[test]
    fn test_low_score_offers_rewrite() {
        let view = view_for(json!({
            "status": "success",
            "article": "# A",
            "brand_score": {"overall_score": 49, "breakdown": {"tone_match": 40}, "issues": ["Too formal"]}
        }));
        assert!(view.actions.rewrite);
        assert!(view.actions.download);
        let score = view.score.unwrap();
        assert_eq!(score.band, Some(ScoreBand::Low));
        assert_eq!(score.breakdown[0].label, "tone match");
    }

    #[test]
    fn test_passing_score_only_downloads() {
        let view = view_for(json!({
            "status": "success",
            "article": "# A",
            "brand_score": {"overall_score": 50, "breakdown": {}, "issues": []}
        }));
        assert!(!view.actions.rewrite);
        assert!(view.actions.download);
    }

    #[test]
    fn test_rewrite_scores_shown_when_changed() {
        let view = view_for(json!({
            "article": "# A",
            "brand_score": {"overall_score": 72},
            "initial_score": 41,
            "final_score": 72
        }));
        assert_eq!(view.initial_score, Some(41.0));
        assert_eq!(view.final_score, Some(72.0));
    }

    #[test]
    fn test_missing_article_hides_download() {
        let view = view_for(json!({"brand_score": {"overall_score": 30}}));
        assert!(!view.actions.download);
        assert!(view.article_html.is_none());
    }

    #[test]
    fn test_null_score_keeps_article_and_download() {
        let view = view_for(json!({
            "status": "success",
            "article": "# Branded",
            "brand_score": {"overall_score": null, "breakdown": {"tone_match": "80%"}}
        }));
        assert!(view.actions.download);
        assert!(!view.actions.rewrite);
        assert!(view.article_html.is_some());
        let score = view.score.unwrap();
        assert_eq!(score.overall, None);
        assert_eq!(score.band, None);
        assert_eq!(score.breakdown[0].value, 80.0);
    }

    #[test]
    fn test_non_object_response_rejected() {
        let error = parse_result(json!("done")).unwrap_err();
        assert!(error.starts_with("Unexpected branding response"));
    }
}
