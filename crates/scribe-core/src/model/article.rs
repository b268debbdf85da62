//! Articles produced by the writing and branding agents.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::brief::{strings_of, text_of};

/// A generated article with its SEO metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// Markdown body.
    #[serde(default)]
    pub article: String,
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub primary_keyword: Option<String>,
    #[serde(default)]
    pub secondary_keywords: Vec<String>,
}

impl Article {
    /// Read an article out of a writing agent response.
    ///
    /// Metadata of the wrong type is coerced to text or dropped; only a
    /// response without `article` text yields `None`.
    pub fn from_response(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        let article = object.get("article").and_then(text_of)?;
        if article.is_empty() {
            return None;
        }

        Some(Self {
            article,
            topic: object.get("topic").and_then(text_of),
            primary_keyword: object.get("primary_keyword").and_then(text_of),
            secondary_keywords: object
                .get("secondary_keywords")
                .map(strings_of)
                .unwrap_or_default(),
        })
    }
}

/// Result of asking the backend for the persisted article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum ArticleOutput {
    Found {
        #[serde(default)]
        article: Option<String>,
    },
    NotFound,
}

impl ArticleOutput {
    /// Read an article-output response. Anything but `status: "found"` is
    /// `NotFound`.
    pub fn from_response(value: &Value) -> Self {
        match value.get("status").and_then(Value::as_str) {
            Some("found") => ArticleOutput::Found {
                article: value.get("article").and_then(text_of),
            },
            _ => ArticleOutput::NotFound,
        }
    }

    /// The article text, when one was found and is non-empty.
    pub fn article(&self) -> Option<&str> {
        match self {
            ArticleOutput::Found { article } => article.as_deref().filter(|a| !a.is_empty()),
            ArticleOutput::NotFound => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_article_from_response() {
        let value = json!({
            "status": "success",
            "article": "# Title",
            "topic": "AI",
            "primary_keyword": "ai for kids",
            "secondary_keywords": ["ai", "kids"]
        });
        let article = Article::from_response(&value).unwrap();
        assert_eq!(article.topic.as_deref(), Some("AI"));
        assert_eq!(article.secondary_keywords.len(), 2);
    }

    #[test]
    fn test_article_without_text() {
        assert!(Article::from_response(&json!({"status": "success"})).is_none());
        assert!(Article::from_response(&json!({"article": ""})).is_none());
        assert!(Article::from_response(&json!({"article": null})).is_none());
        assert!(Article::from_response(&json!(["# Title"])).is_none());
    }

    #[test]
    fn test_article_null_keywords_kept() {
        let value = json!({"article": "# Title", "secondary_keywords": null, "topic": null});
        let article = Article::from_response(&value).unwrap();
        assert_eq!(article.article, "# Title");
        assert!(article.secondary_keywords.is_empty());
        assert_eq!(article.topic, None);
    }

    #[test]
    fn test_article_odd_metadata_coerced() {
        let value = json!({
            "article": "# Title",
            "primary_keyword": 42,
            "secondary_keywords": "ai"
        });
        let article = Article::from_response(&value).unwrap();
        assert_eq!(article.primary_keyword.as_deref(), Some("42"));
        assert_eq!(article.secondary_keywords, vec!["ai".to_string()]);
    }

    #[test]
    fn test_article_output_shapes() {
        let found = ArticleOutput::from_response(&json!({"status": "found", "article": "body"}));
        assert_eq!(found.article(), Some("body"));

        let missing = ArticleOutput::from_response(&json!({"status": "not-found"}));
        assert_eq!(missing, ArticleOutput::NotFound);
        assert_eq!(
            serde_json::to_value(&ArticleOutput::NotFound).unwrap(),
            json!({"status": "not-found"})
        );
    }

    #[test]
    fn test_article_output_null_article() {
        let found = ArticleOutput::from_response(&json!({"status": "found", "article": null}));
        assert_eq!(found, ArticleOutput::Found { article: None });
        assert_eq!(found.article(), None);
    }
}
