//! Provider boundary
//!
//! The studio talks to an external text generator only through
//! [`TextProvider`]. Implementations own transport, authentication and
//! timeouts; the studio makes one call per generation and never retries.

use crate::config::GeneratorConfig;
use crate::error::ProviderError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One completion call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// Compiled instruction text
    pub prompt: String,
    /// Model name
    pub model: String,
    /// Output token cap
    pub max_output_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
}

impl CompletionRequest {
    /// Build a request for `prompt` using the configured model settings
    #[must_use]
    pub fn new(prompt: impl Into<String>, config: &GeneratorConfig) -> Self {
        Self {
            prompt: prompt.into(),
            model: config.model.clone(),
            max_output_tokens: config.max_output_tokens,
            temperature: config.temperature,
        }
    }
}

/// External text generator
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Produce candidate text for a prompt
    ///
    /// # Errors
    /// Returns [`ProviderError`] when no text could be obtained
    async fn complete(&self, request: &CompletionRequest) -> Result<String, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_uses_config_settings() {
        let config = GeneratorConfig::new().with_model("gpt-4o");
        let request = CompletionRequest::new("hello", &config);
        assert_eq!(request.prompt, "hello");
        assert_eq!(request.model, "gpt-4o");
        assert_eq!(request.max_output_tokens, 1200);
    }

    #[tokio::test]
    async fn mock_provider_returns_text() {
        let mut provider = MockTextProvider::new();
        provider
            .expect_complete()
            .withf(|request| request.prompt == "p")
            .times(1)
            .returning(|_| Ok("{}".to_string()));

        let request = CompletionRequest::new("p", &GeneratorConfig::new());
        assert_eq!(provider.complete(&request).await.unwrap(), "{}");
    }
}
