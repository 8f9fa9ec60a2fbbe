//! The text service boundary.
//!
//! Everything the pipeline needs from a language model is one call: prompt in,
//! text out. [`ClaudeService`] is the production implementation;
//! [`crate::testing::ScriptedService`] stands in for it in tests.

use crate::config::JournalConfig;
use async_trait::async_trait;
use claude::{Claude, Request};
use thiserror::Error;

/// Errors from the text service.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Claude API error: {0}")]
    Client(#[from] claude::Error),

    #[error("Text service unavailable: {0}")]
    Unavailable(String),
}

/// A prompt-in, text-out completion service.
///
/// Responses are untrusted: they may carry extra prose, odd casing, or stray
/// punctuation. Callers normalize them.
#[async_trait]
pub trait TextService: Send + Sync {
    /// Complete a single prompt and return the raw response text.
    async fn complete(&self, prompt: &str) -> Result<String, ServiceError>;
}

/// Text service backed by the Claude Messages API.
pub struct ClaudeService {
    client: Claude,
    max_tokens: usize,
    temperature: Option<f32>,
}

impl ClaudeService {
    /// Wrap an existing client, taking generation settings from `config`.
    pub fn new(client: Claude, config: &JournalConfig) -> Self {
        let client = match &config.model {
            Some(model) => client.with_model(model.clone()),
            None => client,
        };

        Self {
            client: client.with_max_retries(config.max_retries),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        }
    }

    /// Create from the ANTHROPIC_API_KEY environment variable.
    pub fn from_env(config: &JournalConfig) -> Result<Self, ServiceError> {
        Ok(Self::new(Claude::from_env()?, config))
    }

    /// The model requests are sent to.
    pub fn model(&self) -> &str {
        self.client.model()
    }
}

#[async_trait]
impl TextService for ClaudeService {
    async fn complete(&self, prompt: &str) -> Result<String, ServiceError> {
        let mut request = Request::prompt(prompt).with_max_tokens(self.max_tokens);
        if let Some(temperature) = self.temperature {
            request = request.with_temperature(temperature);
        }

        let response = self.client.complete(request).await?;
        tracing::debug!(
            model = %response.model,
            input_tokens = response.usage.input_tokens,
            output_tokens = response.usage.output_tokens,
            "text service call complete"
        );

        Ok(response.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claude_service_applies_config() {
        let config = JournalConfig::default()
            .with_model("claude-3-5-haiku-latest")
            .with_max_tokens(64);
        let service = ClaudeService::new(Claude::new("test-key"), &config);

        assert_eq!(service.model(), "claude-3-5-haiku-latest");
        assert_eq!(service.max_tokens, 64);
        assert_eq!(service.temperature, Some(0.0));
    }

    #[test]
    fn test_claude_service_keeps_client_model_without_override() {
        let config = JournalConfig::default();
        let client = Claude::new("test-key").with_model("custom");
        let service = ClaudeService::new(client, &config);

        assert_eq!(service.model(), "custom");
    }
}
