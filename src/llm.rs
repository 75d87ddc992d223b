//! LLM provider abstraction
//!
//! A single chat-completion seam used by the naming engine, with a logging
//! decorator and the `OpenRouter` implementation.

mod error;
mod openrouter;
mod types;

pub use error::{LlmError, LlmErrorKind};
pub use openrouter::{OpenRouterConfig, OpenRouterService, DEFAULT_MODEL, DEFAULT_OPENROUTER_URL};
pub use types::*;

use async_trait::async_trait;
use std::sync::Arc;

/// Common interface for LLM providers
#[async_trait]
pub trait LlmService: Send + Sync {
    /// Make a completion request
    async fn complete(&self, request: &LlmRequest) -> Result<LlmResponse, LlmError>;

    /// Get the model ID
    fn model_id(&self) -> &str;
}

#[async_trait]
impl<T: LlmService + ?Sized> LlmService for Arc<T> {
    async fn complete(&self, request: &LlmRequest) -> Result<LlmResponse, LlmError> {
        (**self).complete(request).await
    }

    fn model_id(&self) -> &str {
        (**self).model_id()
    }
}

/// Logging wrapper for LLM services.
///
/// Records the sampling settings and prompt size of every call alongside its
/// outcome, and flags completions that came back with no text.
pub struct LoggingService {
    inner: Arc<dyn LlmService>,
    model_id: String,
}

impl LoggingService {
    pub fn new(inner: Arc<dyn LlmService>) -> Self {
        let model_id = inner.model_id().to_string();
        Self { inner, model_id }
    }
}

#[async_trait]
impl LlmService for LoggingService {
    async fn complete(&self, request: &LlmRequest) -> Result<LlmResponse, LlmError> {
        let prompt_chars = request.user_text().map_or(0, |text| text.chars().count());
        let start = std::time::Instant::now();
        let result = self.inner.complete(request).await;
        let duration_ms = start.elapsed().as_millis();

        match &result {
            Ok(response) if response.text.trim().is_empty() => {
                tracing::warn!(
                    model = %self.model_id,
                    duration_ms = %duration_ms,
                    prompt_chars,
                    max_tokens = ?request.max_tokens,
                    output_tokens = response.usage.output_tokens,
                    "Completion returned no text"
                );
            }
            Ok(response) => {
                tracing::info!(
                    model = %self.model_id,
                    duration_ms = %duration_ms,
                    prompt_chars,
                    temperature = ?request.temperature,
                    max_tokens = ?request.max_tokens,
                    input_tokens = response.usage.input_tokens,
                    output_tokens = response.usage.output_tokens,
                    reply_chars = response.text.chars().count(),
                    "Completion finished"
                );
            }
            Err(e) => {
                tracing::error!(
                    model = %self.model_id,
                    duration_ms = %duration_ms,
                    prompt_chars,
                    max_tokens = ?request.max_tokens,
                    kind = ?e.kind,
                    error = %e.message,
                    "Completion failed"
                );
            }
        }

        result
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }
}
