//! Brand alignment scoring returned by the branding agent.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

use super::brief::{strings_of, text_of};

/// Scores below this need improvement before the article ships.
pub const REWRITE_THRESHOLD: f64 = 50.0;

/// Brand alignment report for one article.
///
/// A missing or unreadable `overall_score` is `None`: no band is shown and no
/// rewrite is offered.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BrandScore {
    pub overall_score: Option<f64>,
    pub breakdown: BTreeMap<String, f64>,
    pub issues: Vec<String>,
}

/// Display band for a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    High,
    Medium,
    Low,
}

impl BrandScore {
    /// Read a `brand_score` object. Breakdown entries that are not numbers
    /// are skipped.
    pub fn from_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        let breakdown = object
            .get("breakdown")
            .and_then(Value::as_object)
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|(key, value)| number_of(value).map(|n| (key.clone(), n)))
                    .collect()
            })
            .unwrap_or_default();

        Some(Self {
            overall_score: object.get("overall_score").and_then(number_of),
            breakdown,
            issues: object.get("issues").map(strings_of).unwrap_or_default(),
        })
    }

    /// True when the score is under [`REWRITE_THRESHOLD`]; 50 itself passes.
    pub fn needs_improvement(&self) -> bool {
        self.overall_score.is_some_and(|score| score < REWRITE_THRESHOLD)
    }

    pub fn band(&self) -> Option<ScoreBand> {
        self.overall_score.map(|score| {
            if score >= 80.0 {
                ScoreBand::High
            } else if score >= 60.0 {
                ScoreBand::Medium
            } else {
                ScoreBand::Low
            }
        })
    }

    /// Breakdown rows with readable labels (`tone_match` → `tone match`).
    pub fn labelled_breakdown(&self) -> Vec<(String, f64)> {
        self.breakdown
            .iter()
            .map(|(key, value)| (key.replace('_', " "), *value))
            .collect()
    }
}

/// Successful branding agent response.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BrandingResult {
    pub article: String,
    pub brand_score: Option<BrandScore>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_score: Option<f64>,
}

impl BrandingResult {
    /// Read a branding agent response. Fields of the wrong type are dropped
    /// rather than failing the whole result; only a non-object body yields
    /// `None`.
    pub fn from_response(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        Some(Self {
            article: object.get("article").and_then(text_of).unwrap_or_default(),
            brand_score: object.get("brand_score").and_then(BrandScore::from_value),
            initial_score: object.get("initial_score").and_then(number_of),
            final_score: object.get("final_score").and_then(number_of),
        })
    }

    /// True when the agent rewrote the article and the score moved.
    pub fn was_rewritten(&self) -> bool {
        matches!((self.initial_score, self.final_score), (Some(a), Some(b)) if a != b)
    }
}

/// A score as a number. Numeric strings such as `"80"` or `"80%"` are read;
/// anything else is no score.
fn number_of(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().trim_end_matches('%').trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn score(overall: f64) -> BrandScore {
        BrandScore {
            overall_score: Some(overall),
            ..Default::default()
        }
    }

    #[test]
    fn test_threshold_is_inclusive_at_fifty() {
        assert!(score(49.0).needs_improvement());
        assert!(score(49.9).needs_improvement());
        assert!(!score(50.0).needs_improvement());
        assert!(!score(92.0).needs_improvement());
    }

    #[test]
    fn test_bands() {
        assert_eq!(score(80.0).band(), Some(ScoreBand::High));
        assert_eq!(score(79.0).band(), Some(ScoreBand::Medium));
        assert_eq!(score(60.0).band(), Some(ScoreBand::Medium));
        assert_eq!(score(59.0).band(), Some(ScoreBand::Low));
    }

    #[test]
    fn test_branding_result_from_backend() {
        let value = json!({
            "status": "success",
            "initial_score": 42,
            "final_score": 71,
            "article": "# Branded",
            "brand_score": {
                "overall_score": 71,
                "breakdown": {"tone_match": 80, "audience_fit": 62},
                "issues": ["Too formal in intro"]
            }
        });
        let result = BrandingResult::from_response(&value).unwrap();
        assert!(result.was_rewritten());
        let score = result.brand_score.unwrap();
        assert_eq!(score.overall_score, Some(71.0));
        assert_eq!(
            score.labelled_breakdown(),
            vec![("audience fit".to_string(), 62.0), ("tone match".to_string(), 80.0)]
        );
    }

    #[test]
    fn test_null_score_keeps_article_without_decision() {
        let value = json!({
            "article": "# Branded",
            "brand_score": {"overall_score": null, "issues": null}
        });
        let result = BrandingResult::from_response(&value).unwrap();
        assert_eq!(result.article, "# Branded");
        let score = result.brand_score.unwrap();
        assert_eq!(score.overall_score, None);
        assert_eq!(score.band(), None);
        assert!(!score.needs_improvement());
        assert!(score.issues.is_empty());
    }

    #[test]
    fn test_breakdown_strings_read_or_skipped() {
        let value = json!({
            "article": "# Branded",
            "brand_score": {
                "overall_score": "45",
                "breakdown": {"tone_match": "80%", "audience_fit": "n/a", "clarity": 70}
            }
        });
        let score = BrandingResult::from_response(&value).unwrap().brand_score.unwrap();
        assert_eq!(score.overall_score, Some(45.0));
        assert!(score.needs_improvement());
        assert_eq!(score.breakdown.get("tone_match"), Some(&80.0));
        assert_eq!(score.breakdown.get("clarity"), Some(&70.0));
        assert!(!score.breakdown.contains_key("audience_fit"));
    }

    #[test]
    fn test_odd_top_level_fields_dropped() {
        let value = json!({"article": "# A", "brand_score": "high", "initial_score": "?"});
        let result = BrandingResult::from_response(&value).unwrap();
        assert_eq!(result.article, "# A");
        assert_eq!(result.brand_score, None);
        assert_eq!(result.initial_score, None);
        assert!(BrandingResult::from_response(&json!("oops")).is_none());
    }
}
