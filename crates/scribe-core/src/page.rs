//! Per-page view state.
//!
//! Every workflow page moves through `Idle → Submitting → Success | Failed`.
//! Success may be re-submitted (a re-run with a suggestion) and Failed can be
//! cleared back to Idle.

use serde::Serialize;

use crate::error::{ScribeError, ScribeResult};
use crate::model::BrandScore;

/// View state of one page.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PageState<T> {
    #[default]
    Idle,
    Submitting,
    Success {
        payload: T,
        message: Option<String>,
    },
    Failed {
        error: String,
    },
}

impl<T> PageState<T> {
    /// A page whose request is already in flight.
    pub fn submitting() -> Self {
        PageState::Submitting
    }

    /// Start a submission. Clears any previous result, message or error.
    ///
    /// A page that is already submitting rejects a second submission.
    pub fn submit(&mut self) -> ScribeResult<()> {
        if self.is_submitting() {
            return Err(ScribeError::validation("A request is already in progress"));
        }
        *self = PageState::Submitting;
        Ok(())
    }

    /// Record a successful response.
    pub fn succeed(&mut self, payload: T, message: impl Into<String>) {
        let message = message.into();
        *self = PageState::Success {
            payload,
            message: (!message.is_empty()).then_some(message),
        };
    }

    /// Record a failure. The previous result is dropped.
    pub fn fail(&mut self, error: impl Into<String>) {
        *self = PageState::Failed { error: error.into() };
    }

    /// Clear a failure back to idle. Other states are left alone.
    pub fn clear(&mut self) {
        if matches!(self, PageState::Failed { .. }) {
            *self = PageState::Idle;
        }
    }

    /// Apply the outcome of a submission.
    pub fn settle<E: ToString>(&mut self, outcome: Result<T, E>, success_message: &str) {
        match outcome {
            Ok(payload) => self.succeed(payload, success_message),
            Err(error) => self.fail(error.to_string()),
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, PageState::Submitting)
    }

    pub fn payload(&self) -> Option<&T> {
        match self {
            PageState::Success { payload, .. } => Some(payload),
            _ => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            PageState::Success { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            PageState::Failed { error } => Some(error),
            _ => None,
        }
    }
}

/// The workflow pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Research,
    Writing,
    Branding,
}

impl PageKind {
    /// Whether the page runs its agent as soon as it is opened.
    ///
    /// Research always waits for the form to be submitted.
    pub fn runs_on_open(&self) -> bool {
        match self {
            PageKind::Research => false,
            PageKind::Writing | PageKind::Branding => true,
        }
    }

    /// Form fields the browser must fill before submitting.
    pub fn required_fields(&self) -> &'static [&'static str] {
        match self {
            PageKind::Research => &["topic", "target_audience", "content_goal", "region"],
            PageKind::Writing | PageKind::Branding => &[],
        }
    }
}

/// Actions the branding page offers for a scored article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct BrandingActions {
    pub download: bool,
    pub rewrite: bool,
}

impl BrandingActions {
    /// Download whenever there is an article; the suggestion box and rewrite
    /// only while the score needs improvement.
    pub fn for_score(score: Option<&BrandScore>, has_article: bool) -> Self {
        Self {
            download: has_article,
            rewrite: score.is_some_and(BrandScore::needs_improvement),
        }
    }
}

/// A rewrite or re-run can only be requested with a non-empty suggestion.
pub fn suggestion_enabled(suggestion: Option<&str>) -> bool {
    suggestion.is_some_and(|s| !s.trim().is_empty())
}
