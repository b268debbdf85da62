//! Scribe backend client.
//!
//! Talks to the external generation backend over HTTP. JSON, multipart and
//! empty bodies are supported; each call is made exactly once.

pub mod client;
pub mod config;
pub mod endpoint;
pub mod form;

pub use client::{BackendClient, Payload};
pub use config::{BackendConfig, BACKEND_URL_ENV, DEFAULT_BACKEND_URL};
pub use endpoint::Endpoint;
pub use form::{FormField, FormPayload};
