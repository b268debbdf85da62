//! Research brief produced by the research agent.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One SEO research brief.
///
/// The backend is free to send fewer fields, so everything is optional.
/// Fields whose shape varies between agent versions stay as raw JSON, and
/// unrecognised fields are kept in `extra` so that re-serializing a brief
/// reproduces what the backend sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResearchBrief {
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub blog_number: Value,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub blog_angle: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_keyword: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub secondary_keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub question_keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_angle: Option<String>,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub recommended_structure: Value,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub recommended_word_count: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ranking_feasibility: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub writing_instructions: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ResearchBrief {
    /// Build a brief from a JSON object, tolerating odd field types.
    ///
    /// Text fields that arrive as numbers, arrays or objects are coerced to
    /// display text instead of failing the whole brief.
    pub fn from_object(object: &Map<String, Value>) -> Self {
        let mut brief = ResearchBrief::default();
        for (key, value) in object {
            match key.as_str() {
                "blog_number" => brief.blog_number = value.clone(),
                "blog_angle" => brief.blog_angle = value.clone(),
                "recommended_structure" => brief.recommended_structure = value.clone(),
                "recommended_word_count" => brief.recommended_word_count = value.clone(),
                "primary_keyword" => brief.primary_keyword = text_of(value),
                "content_angle" => brief.content_angle = text_of(value),
                "ranking_feasibility" => brief.ranking_feasibility = text_of(value),
                "writing_instructions" => brief.writing_instructions = text_of(value),
                "secondary_keywords" => brief.secondary_keywords = strings_of(value),
                "question_keywords" => brief.question_keywords = strings_of(value),
                _ => {
                    brief.extra.insert(key.clone(), value.clone());
                }
            }
        }
        brief
    }

    /// Search link shown next to the primary keyword.
    pub fn primary_keyword_link(&self) -> Option<String> {
        self.primary_keyword.as_deref().map(resource_link)
    }
}

/// Google search URL for a keyword.
pub fn resource_link(query: &str) -> String {
    format!("https://www.google.com/search?q={}", query.replace(' ', "+"))
}

/// Render a loosely typed brief value as display text.
///
/// Arrays are joined with ", ", objects become `key: value` pairs and null is
/// empty.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(display_value)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(map) => map
            .iter()
            .map(|(k, v)| format!("{}: {}", k, display_value(v)))
            .collect::<Vec<_>>()
            .join("; "),
        other => other.to_string(),
    }
}

pub(crate) fn text_of(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(display_value(other)),
    }
}

pub(crate) fn strings_of(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().map(display_value).collect(),
        Value::Null => Vec::new(),
        other => vec![display_value(other)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_fields_are_tolerated() {
        let brief = ResearchBrief::from_object(json!({"blog_number": 1}).as_object().unwrap());
        assert_eq!(brief.primary_keyword, None);
        assert_eq!(brief.writing_instructions, None);
        assert!(brief.secondary_keywords.is_empty());
    }

    #[test]
    fn test_unknown_fields_survive_round_trip() {
        let source = json!({
            "primary_keyword": "ai for kids",
            "secondary_keywords": ["ai tools", "coding"],
            "serp_notes": {"difficulty": "Low"}
        });
        let brief = ResearchBrief::from_object(source.as_object().unwrap());
        assert_eq!(brief.extra.get("serp_notes"), Some(&json!({"difficulty": "Low"})));
        assert_eq!(serde_json::to_value(&brief).unwrap(), source);
    }

    #[test]
    fn test_non_string_keywords_are_flattened() {
        let source = json!({"question_keywords": [{"q": "what is ai"}, "why"]});
        let brief = ResearchBrief::from_object(source.as_object().unwrap());
        assert_eq!(brief.question_keywords, vec!["q: what is ai", "why"]);
    }

    #[test]
    fn test_resource_link() {
        assert_eq!(
            resource_link("ai for school students"),
            "https://www.google.com/search?q=ai+for+school+students"
        );
    }

    #[test]
    fn test_display_value() {
        assert_eq!(display_value(&json!(["Intro", "Body"])), "Intro, Body");
        assert_eq!(display_value(&json!(1500)), "1500");
        assert_eq!(display_value(&Value::Null), "");
    }
}
