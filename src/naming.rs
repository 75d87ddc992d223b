//! Track name generation
//!
//! Builds a prompt from a [`GenerationRequest`], makes one completion call
//! and parses the reply into a short ordered list of names. Every failure
//! collapses to [`SENTINEL_NAME`]; nothing propagates past [`NamingEngine::generate`].

pub mod format;
pub mod parse;
pub mod prompt;
pub mod request;

#[cfg(test)]
mod proptests;

pub use format::format_track_names;
pub use parse::parse_track_names;
pub use request::{GenerationRequest, Style};

use crate::llm::{LlmError, LlmRequest, LlmService};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

/// Placeholder result returned for any generation failure
pub const SENTINEL_NAME: &str = "Error generating names";

pub const GENERATION_TIMEOUT: Duration = Duration::from_secs(30);
const TEMPERATURE: f32 = 0.9;
const MAX_TOKENS: u32 = 300;

/// Generates track names through an [`LlmService`]
#[derive(Clone)]
pub struct NamingEngine {
    llm: Arc<dyn LlmService>,
    timeout: Duration,
}

impl NamingEngine {
    pub fn new(llm: Arc<dyn LlmService>) -> Self {
        Self {
            llm,
            timeout: GENERATION_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Generate up to ten names for `request`.
    ///
    /// Returns `[SENTINEL_NAME]` if the call fails, times out or returns an
    /// unusable body.
    pub async fn generate(&self, request: &GenerationRequest) -> Vec<String> {
        match self.try_generate(request).await {
            Ok(names) => {
                tracing::debug!(mode = request.mode_name(), count = names.len(), "Generated names");
                names
            }
            Err(e) => {
                tracing::error!(
                    mode = request.mode_name(),
                    kind = ?e.kind,
                    error = %e.message,
                    "Track name generation failed"
                );
                vec![SENTINEL_NAME.to_string()]
            }
        }
    }

    async fn try_generate(&self, request: &GenerationRequest) -> Result<Vec<String>, LlmError> {
        let llm_request =
            LlmRequest::single_turn(Some(prompt::SYSTEM_PROMPT), prompt::build_prompt(request))
                .with_temperature(TEMPERATURE)
                .with_max_tokens(MAX_TOKENS);

        let response = timeout(self.timeout, self.llm.complete(&llm_request))
            .await
            .map_err(|_| {
                LlmError::timeout(format!(
                    "No reply within {}s",
                    self.timeout.as_secs_f32()
                ))
            })??;

        Ok(parse_track_names(&response.text))
    }
}
