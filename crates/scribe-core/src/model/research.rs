//! Research agent request.

use serde::{Deserialize, Serialize};
use std::fmt;

/// `blog_count` sent when the form omits it.
pub const DEFAULT_BLOG_COUNT: &str = "1";

/// Largest number of blogs the research form offers.
pub const MAX_BLOG_COUNT: u8 = 5;

/// Goal the content should serve, as offered by the research form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ContentGoal {
    #[default]
    Educational,
    Informational,
    Commercial,
    #[serde(rename = "Brand Authority")]
    BrandAuthority,
}

impl ContentGoal {
    pub const ALL: [ContentGoal; 4] = [
        ContentGoal::Educational,
        ContentGoal::Informational,
        ContentGoal::Commercial,
        ContentGoal::BrandAuthority,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentGoal::Educational => "Educational",
            ContentGoal::Informational => "Informational",
            ContentGoal::Commercial => "Commercial",
            ContentGoal::BrandAuthority => "Brand Authority",
        }
    }
}

impl fmt::Display for ContentGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A document uploaded alongside the research form.
#[derive(Debug, Clone, PartialEq)]
pub struct Upload {
    pub filename: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Inputs of one research run.
///
/// Fields the browser did not send stay `None` and are not forwarded. The one
/// exception is `blog_count`, which falls back to [`DEFAULT_BLOG_COUNT`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResearchRequest {
    pub topic: Option<String>,
    pub target_audience: Option<String>,
    pub content_goal: Option<String>,
    pub brand: Option<String>,
    pub region: Option<String>,
    pub blog_count: Option<String>,
    pub file: Option<Upload>,
    pub suggestion: Option<String>,
}

impl ResearchRequest {
    /// Values the research page starts with.
    pub fn page_defaults() -> Self {
        Self {
            topic: Some("AI for school students".to_string()),
            target_audience: Some("Kids aged 10-14".to_string()),
            content_goal: Some(ContentGoal::Educational.to_string()),
            brand: Some("AstroKids".to_string()),
            region: Some("India".to_string()),
            blog_count: Some(DEFAULT_BLOG_COUNT.to_string()),
            file: None,
            suggestion: None,
        }
    }

    /// Record a named text field from the browser form. Unknown names are
    /// ignored.
    pub fn set_field(&mut self, name: &str, value: String) {
        let slot = match name {
            "topic" => &mut self.topic,
            "target_audience" => &mut self.target_audience,
            "content_goal" => &mut self.content_goal,
            "brand" => &mut self.brand,
            "region" => &mut self.region,
            "blog_count" => &mut self.blog_count,
            "suggestion" => &mut self.suggestion,
            _ => return,
        };
        *slot = Some(value);
    }

    /// Effective blog count, applying the default for a missing or blank value.
    pub fn blog_count(&self) -> &str {
        match self.blog_count.as_deref().map(str::trim) {
            None | Some("") => DEFAULT_BLOG_COUNT,
            Some(count) => count,
        }
    }

    /// Text fields in backend order. `blog_count` is always present.
    pub fn text_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = Vec::new();
        let optional = [
            ("topic", &self.topic),
            ("target_audience", &self.target_audience),
            ("content_goal", &self.content_goal),
            ("brand", &self.brand),
            ("region", &self.region),
        ];
        for (name, value) in optional {
            if let Some(value) = value {
                fields.push((name, value.clone()));
            }
        }
        fields.push(("blog_count", self.blog_count().to_string()));
        if let Some(suggestion) = self.suggestion.as_deref().filter(|s| !s.trim().is_empty()) {
            fields.push(("suggestion", suggestion.to_string()));
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(blog_count: Option<&str>) -> ResearchRequest {
        let mut req = ResearchRequest::default();
        req.set_field("topic", "AI".into());
        req.set_field("region", "India".into());
        if let Some(count) = blog_count {
            req.set_field("blog_count", count.into());
        }
        req
    }

    #[test]
    fn test_missing_blog_count_matches_explicit_one() {
        assert_eq!(request(None).text_fields(), request(Some("1")).text_fields());
        assert_eq!(request(Some("")).blog_count(), "1");
    }

    #[test]
    fn test_absent_fields_are_not_forwarded() {
        let fields = request(Some("3")).text_fields();
        let names: Vec<_> = fields.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["topic", "region", "blog_count"]);
        assert_eq!(fields[2].1, "3");
    }

    #[test]
    fn test_blank_suggestion_is_dropped() {
        let mut req = request(None);
        req.set_field("suggestion", "   ".into());
        assert!(req.text_fields().iter().all(|(n, _)| *n != "suggestion"));
        req.set_field("suggestion", "more examples".into());
        assert!(req.text_fields().contains(&("suggestion", "more examples".to_string())));
    }

    #[test]
    fn test_unknown_field_ignored() {
        let mut req = ResearchRequest::default();
        req.set_field("tone", "warm".into());
        assert_eq!(req, ResearchRequest::default());
    }

    #[test]
    fn test_content_goal_serializes_with_label() {
        let json = serde_json::to_string(&ContentGoal::BrandAuthority).unwrap();
        assert_eq!(json, "\"Brand Authority\"");
    }
}
