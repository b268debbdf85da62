//! Backend connection settings.

use std::time::Duration;
use tracing::debug;

use scribe_core::{ScribeError, ScribeResult};

/// Default backend URL.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8001";

/// Environment variable overriding the backend URL.
pub const BACKEND_URL_ENV: &str = "SCRIBE_BACKEND_URL";

/// Where the generation backend lives and how to reach it.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendConfig {
    pub base_url: String,
    /// Per-request timeout. `None` leaves the HTTP client default.
    pub timeout: Option<Duration>,
}

impl BackendConfig {
    /// Create a config for the given base URL. A trailing slash is dropped.
    pub fn new(base_url: &str) -> ScribeResult<Self> {
        let base_url = base_url.trim().trim_end_matches('/');
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ScribeError::config(format!(
                "backend URL must start with http:// or https://, got '{}'",
                base_url
            )));
        }
        Ok(Self {
            base_url: base_url.to_string(),
            timeout: None,
        })
    }

    /// Uses the `SCRIBE_BACKEND_URL` environment variable if set,
    /// otherwise defaults to `http://localhost:8001`.
    pub fn from_env() -> ScribeResult<Self> {
        let base_url =
            std::env::var(BACKEND_URL_ENV).unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string());
        debug!(base_url = %base_url, "Backend config loaded from environment");
        Self::new(&base_url)
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Absolute URL of a backend path.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BACKEND_URL.to_string(),
            timeout: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_dropped() {
        let config = BackendConfig::new("http://127.0.0.1:8001/").unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:8001");
        assert_eq!(config.url("/writing-agent"), "http://127.0.0.1:8001/writing-agent");
        assert_eq!(config.url("save-output"), "http://127.0.0.1:8001/save-output");
    }

    #[test]
    fn test_scheme_required() {
        assert!(matches!(
            BackendConfig::new("localhost:8001"),
            Err(ScribeError::Config(_))
        ));
    }

    #[test]
    fn test_default_has_no_timeout() {
        let config = BackendConfig::default();
        assert_eq!(config.base_url, DEFAULT_BACKEND_URL);
        assert_eq!(config.timeout, None);
    }
}
