//! Multipart form payloads.

use reqwest::multipart::{Form, Part};

use scribe_core::model::{ResearchRequest, Upload};
use scribe_core::ScribeResult;

/// One named form field.
#[derive(Debug, Clone, PartialEq)]
pub enum FormField {
    Text { name: String, value: String },
    File { name: String, upload: Upload },
}

/// Ordered multipart fields, sent as given.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormPayload {
    fields: Vec<FormField>,
}

impl FormPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: impl Into<String>) -> Self {
        self.fields.push(FormField::Text {
            name: name.to_string(),
            value: value.into(),
        });
        self
    }

    /// Add a text field only when a value is present.
    pub fn optional_text(self, name: &str, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.text(name, value),
            None => self,
        }
    }

    pub fn file(mut self, name: &str, upload: Upload) -> Self {
        self.fields.push(FormField::File {
            name: name.to_string(),
            upload,
        });
        self
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Build the reqwest multipart form.
    pub fn into_multipart(self) -> ScribeResult<Form> {
        let mut form = Form::new();
        for field in self.fields {
            form = match field {
                FormField::Text { name, value } => form.text(name, value),
                FormField::File { name, upload } => {
                    let mut part = Part::bytes(upload.bytes).file_name(upload.filename);
                    if let Some(content_type) = upload.content_type.as_deref() {
                        part = part.mime_str(content_type).map_err(|e| {
                            scribe_core::ScribeError::validation(format!(
                                "Invalid upload content type '{}': {}",
                                content_type, e
                            ))
                        })?;
                    }
                    form.part(name, part)
                }
            };
        }
        Ok(form)
    }
}

impl From<ResearchRequest> for FormPayload {
    fn from(request: ResearchRequest) -> Self {
        let mut payload = FormPayload::new();
        for (name, value) in request.text_fields() {
            payload = payload.text(name, value);
        }
        if let Some(upload) = request.file {
            payload = payload.file("file", upload);
        }
        payload
    }
}
