//! Markdown download.

use axum::{
    extract::Form,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use scribe_core::export::{ExportKind, MarkdownExport, MARKDOWN_CONTENT_TYPE};

#[derive(Debug, Deserialize)]
pub struct DownloadForm {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub kind: Option<String>,
}

/// POST /download - Hand the submitted markdown back as a file.
pub async fn download(Form(form): Form<DownloadForm>) -> Response {
    if form.content.trim().is_empty() {
        return (StatusCode::BAD_REQUEST, "Nothing to download").into_response();
    }

    let export = MarkdownExport::now(ExportKind::parse(form.kind.as_deref()), form.content);
    attachment(export)
}

fn attachment(export: MarkdownExport) -> Response {
    let disposition = match HeaderValue::from_str(&export.content_disposition()) {
        Ok(value) => value,
        Err(_) => HeaderValue::from_static("attachment"),
    };

    (
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(MARKDOWN_CONTENT_TYPE)),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        export.content,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn test_attachment_headers() {
        let at = DateTime::from_timestamp_millis(1_700_000_000_000).unwrap();
        let response = attachment(MarkdownExport::new(ExportKind::Branded, "# Hi".into(), at));

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/markdown");
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"article_branded_1700000000000.md\""
        );
    }
}
