//! Browser form extraction.

use axum::extract::multipart::{Multipart, MultipartRejection};
use tracing::debug;

use scribe_core::model::{ResearchRequest, Upload};
use scribe_core::{ScribeError, ScribeResult};

/// Fields of a submitted multipart form, in arrival order.
#[derive(Debug, Default)]
pub struct FormFields {
    pub text: Vec<(String, String)>,
    pub files: Vec<(String, Upload)>,
}

impl FormFields {
    /// Last value of a text field.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.text
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn take_file(&mut self, name: &str) -> Option<Upload> {
        let index = self.files.iter().position(|(n, _)| n == name)?;
        Some(self.files.remove(index).1)
    }

    /// Build a research request. Unknown fields are dropped.
    pub fn into_research_request(mut self) -> ResearchRequest {
        let mut request = ResearchRequest::default();
        request.file = self.take_file("file");
        for (name, value) in self.text {
            request.set_field(&name, value);
        }
        request
    }
}

/// Read every part of a multipart body.
///
/// A file input left empty arrives with a blank file name and no content; it
/// is skipped.
pub async fn read_multipart(
    multipart: Result<Multipart, MultipartRejection>,
) -> ScribeResult<FormFields> {
    let mut multipart =
        multipart.map_err(|e| ScribeError::validation(format!("Expected a multipart form: {}", e)))?;
    let mut fields = FormFields::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ScribeError::validation(format!("Malformed form data: {}", e)))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match field.file_name().map(str::to_string) {
            Some(filename) => {
                let content_type = field.content_type().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ScribeError::validation(format!("Failed to read upload: {}", e)))?;
                if filename.is_empty() && bytes.is_empty() {
                    continue;
                }
                debug!(field = %name, filename = %filename, size = bytes.len(), "Received upload");
                fields.files.push((
                    name,
                    Upload {
                        filename,
                        content_type,
                        bytes: bytes.to_vec(),
                    },
                ));
            }
            None => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| ScribeError::validation(format!("Failed to read field: {}", e)))?;
                fields.text.push((name, value));
            }
        }
    }

    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_research_request_from_fields() {
        let mut fields = FormFields::default();
        fields.text.push(("topic".into(), "AI".into()));
        fields.text.push(("extra".into(), "ignored".into()));
        fields.files.push((
            "file".into(),
            Upload {
                filename: "brief.pdf".into(),
                content_type: Some("application/pdf".into()),
                bytes: vec![1, 2, 3],
            },
        ));

        let request = fields.into_research_request();
        assert_eq!(request.topic.as_deref(), Some("AI"));
        assert_eq!(request.blog_count(), "1");
        assert_eq!(request.file.unwrap().filename, "brief.pdf");
    }

    #[test]
    fn test_last_value_wins() {
        let mut fields = FormFields::default();
        fields.text.push(("suggestion".into(), "first".into()));
        fields.text.push(("suggestion".into(), "second".into()));
        assert_eq!(fields.get("suggestion"), Some("second"));
        assert_eq!(fields.get("missing"), None);
    }
}
