//! HTTP client for the generation backend.
//!
//! Every call is a single attempt. Failures are classified into
//! `BackendUnreachable`, `BackendError` and `MalformedResponse`.

use reqwest::{Method, RequestBuilder};
use serde_json::Value;
use std::time::Instant;
use tracing::{debug, warn};

use scribe_core::{ScribeError, ScribeResult};

use crate::config::BackendConfig;
use crate::endpoint::Endpoint;
use crate::form::FormPayload;

/// Request body sent to the backend.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// No body.
    Empty,
    /// JSON-encoded body.
    Json(Value),
    /// Multipart form body.
    Form(FormPayload),
}

/// Backend client.
#[derive(Clone)]
pub struct BackendClient {
    config: BackendConfig,
    client: reqwest::Client,
}

impl BackendClient {
    /// Create a client for the given config.
    pub fn new(config: BackendConfig) -> ScribeResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ScribeError::config(format!("Failed to build HTTP client: {}", e)))?;

        debug!(base_url = %config.base_url, timeout = ?config.timeout, "BackendClient initialized");
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// GET an endpoint.
    pub async fn get(&self, endpoint: Endpoint) -> ScribeResult<Value> {
        self.call(Method::GET, endpoint, Payload::Empty).await
    }

    /// POST a JSON body.
    pub async fn post_json(&self, endpoint: Endpoint, body: Value) -> ScribeResult<Value> {
        self.call(Method::POST, endpoint, Payload::Json(body)).await
    }

    /// POST a multipart form.
    pub async fn post_form(&self, endpoint: Endpoint, form: FormPayload) -> ScribeResult<Value> {
        self.call(Method::POST, endpoint, Payload::Form(form)).await
    }

    /// POST without a body.
    pub async fn post_empty(&self, endpoint: Endpoint) -> ScribeResult<Value> {
        self.call(Method::POST, endpoint, Payload::Empty).await
    }

    /// Perform one call and decode the JSON response.
    pub async fn call(
        &self,
        method: Method,
        endpoint: Endpoint,
        payload: Payload,
    ) -> ScribeResult<Value> {
        let url = self.config.url(endpoint.path());
        let request = self.build(method.clone(), &url, payload)?;

        let started = Instant::now();
        let response = request.send().await.map_err(|e| {
            warn!(%method, url = %url, error = %e, "Backend request failed");
            ScribeError::BackendUnreachable(describe_send_error(&e))
        })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            warn!(%method, url = %url, error = %e, "Failed to read backend response body");
            ScribeError::BackendUnreachable(format!("Failed to read response body: {}", e))
        })?;
        debug!(
            %method,
            url = %url,
            status = status.as_u16(),
            bytes = text.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Backend responded"
        );

        if !status.is_success() {
            warn!(%method, url = %url, status = status.as_u16(), body = %text, "Backend error");
            let body = serde_json::from_str(&text).unwrap_or(Value::String(text));
            return Err(ScribeError::BackendError {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&text).map_err(|e| {
            warn!(%method, url = %url, error = %e, "Backend returned malformed JSON");
            ScribeError::MalformedResponse {
                reason: e.to_string(),
                raw: text,
            }
        })
    }

    fn build(&self, method: Method, url: &str, payload: Payload) -> ScribeResult<RequestBuilder> {
        let request = self.client.request(method, url);
        Ok(match payload {
            Payload::Empty => request,
            Payload::Json(body) => request.json(&body),
            Payload::Form(form) => request.multipart(form.into_multipart()?),
        })
    }
}

fn describe_send_error(error: &reqwest::Error) -> String {
    if error.is_connect() {
        format!("could not connect to backend: {}", error)
    } else if error.is_timeout() {
        format!("backend request timed out: {}", error)
    } else {
        error.to_string()
    }
}
