//! Generation endpoint client.
//!
//! This module talks to the remote text-generation endpoint that powers the
//! museum guide. The endpoint is treated as an opaque collaborator: we send an
//! ordered list of turns and read back a server-sent-event byte stream.
//!
//! # Overview
//!
//! The [`GenerationDriver`] trait is the seam between the guide and the wire.
//! [`GeminiDriver`] implements it over `reqwest`; tests substitute scripted
//! drivers. Decoding the byte stream into text fragments lives in
//! [`decoder`], independent of any transport.
//!
//! # Example
//!
//! ```rust,ignore
//! use museum_site::llm::{GeminiDriver, GenerationSettings};
//!
//! let settings = GenerationSettings {
//!     base_url: "https://generativelanguage.googleapis.com".to_string(),
//!     model: "gemini-2.5-flash".to_string(),
//!     app_id: "museum-site".to_string(),
//!     api_key: None,
//! };
//! let driver = GeminiDriver::new(settings);
//! ```

pub mod decoder;
pub mod gemini;

pub use decoder::FragmentDecoder;
pub use gemini::GeminiDriver;

use std::pin::Pin;

use axum::body::Bytes;
use futures::Stream;
use serde::{Deserialize, Serialize};

/// Connection settings for the generation endpoint.
#[derive(Clone)]
pub struct GenerationSettings {
    /// Base URL of the endpoint (e.g. `https://generativelanguage.googleapis.com`).
    pub base_url: String,
    /// Model identifier (e.g. `gemini-2.5-flash`).
    pub model: String,
    /// Identifier sent as `X-App-Id` on every outbound request.
    pub app_id: String,
    /// Optional API key, sent as `x-goog-api-key`.
    pub api_key: Option<String>,
}

impl std::fmt::Debug for GenerationSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerationSettings")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("app_id", &self.app_id)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl GenerationSettings {
    /// Full URL of the streaming endpoint for the configured model.
    #[must_use]
    pub fn stream_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:streamGenerateContent?alt=sse",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

/// Author of a turn on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Visitor (and the system preamble, which the endpoint takes as a user turn).
    User,
    /// Generated answer.
    Model,
}

/// A text part of a turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    /// The text content.
    pub text: String,
}

/// One turn of the request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    /// Author of the turn.
    pub role: Role,
    /// Text parts (always exactly one for this site).
    pub parts: Vec<Part>,
}

impl Content {
    /// Create a single-part text turn.
    #[must_use]
    pub fn text(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            parts: vec![Part { text: text.into() }],
        }
    }
}

/// Request body sent to the generation endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Ordered turns: preamble, history, then the new user turn.
    pub contents: Vec<Content>,
}

/// Errors raised while talking to the generation endpoint.
///
/// Every variant is a transmission failure; malformed stream records are not
/// errors and never reach this type.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// The endpoint answered with a non-success status.
    #[error("generation endpoint returned status {0}")]
    Status(reqwest::StatusCode),
    /// The request could not be sent or the stream broke mid-read.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// Any other failure reported by a driver.
    #[error("{0}")]
    Other(String),
}

/// Raw response body as it arrives on the wire.
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, GenerationError>> + Send>>;

/// Trait for generation endpoint drivers.
///
/// A driver opens exactly one streaming request per call and hands back the
/// response body untouched. A non-success status must be reported as
/// [`GenerationError::Status`] before any bytes are yielded.
#[async_trait::async_trait]
pub trait GenerationDriver: Send + Sync {
    /// Open a streaming request.
    async fn stream(&self, req: GenerationRequest) -> Result<ByteStream, GenerationError>;
}
