//! Gemini `streamGenerateContent` driver.
//!
//! This module implements [`GenerationDriver`] for the SSE flavour of the
//! Gemini API (`:streamGenerateContent?alt=sse`).

use futures::StreamExt;

use super::{ByteStream, GenerationDriver, GenerationError, GenerationRequest, GenerationSettings};

/// Header carrying the site identifier on outbound requests.
const APP_ID_HEADER: &str = "X-App-Id";

/// Header carrying the optional API key.
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Driver for the Gemini streaming endpoint.
///
/// No client timeout is configured: a stalled endpoint stalls the turn until
/// the stream ends or errors.
#[derive(Clone)]
pub struct GeminiDriver {
    http: reqwest::Client,
    settings: GenerationSettings,
}

impl std::fmt::Debug for GeminiDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiDriver")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl GeminiDriver {
    /// Create a new driver with the given settings.
    #[must_use]
    pub fn new(settings: GenerationSettings) -> Self {
        Self {
            http: reqwest::Client::new(),
            settings,
        }
    }
}

#[async_trait::async_trait]
impl GenerationDriver for GeminiDriver {
    async fn stream(&self, req: GenerationRequest) -> Result<ByteStream, GenerationError> {
        let url = self.settings.stream_url();

        tracing::debug!(
            url = %url,
            turn_count = req.contents.len(),
            "Opening generation stream"
        );

        let mut rb = self
            .http
            .post(&url)
            .header(APP_ID_HEADER, &self.settings.app_id)
            .json(&req);
        if let Some(key) = &self.settings.api_key {
            rb = rb.header(API_KEY_HEADER, key);
        }

        let resp = rb.send().await?;
        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(status = %status, "Generation endpoint rejected the request");
            return Err(GenerationError::Status(status));
        }

        let byte_stream = resp
            .bytes_stream()
            .map(|chunk| chunk.map_err(GenerationError::from));

        Ok(Box::pin(byte_stream))
    }
}
