//! Markdown download files.

use chrono::{DateTime, Utc};

/// Content type of exported articles.
pub const MARKDOWN_CONTENT_TYPE: &str = "text/markdown";

/// Which article a download holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportKind {
    #[default]
    Article,
    Branded,
}

impl ExportKind {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("branded") => ExportKind::Branded,
            _ => ExportKind::Article,
        }
    }

    fn prefix(&self) -> &'static str {
        match self {
            ExportKind::Article => "article",
            ExportKind::Branded => "article_branded",
        }
    }
}

/// A markdown file ready to hand to the browser.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkdownExport {
    pub filename: String,
    pub content: String,
}

impl MarkdownExport {
    /// Name the file after the export time in unix milliseconds.
    pub fn new(kind: ExportKind, content: String, at: DateTime<Utc>) -> Self {
        Self {
            filename: format!("{}_{}.md", kind.prefix(), at.timestamp_millis()),
            content,
        }
    }

    pub fn now(kind: ExportKind, content: String) -> Self {
        Self::new(kind, content, Utc::now())
    }

    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.filename)
    }
}
