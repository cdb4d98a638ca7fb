//! HTTP client for OpenAI-compatible chat-completions endpoints

use crate::wire::{parse_response, ChatRequest};
use async_trait::async_trait;
use signal_core::{CompletionRequest, GeneratorConfig, ProviderError, TextProvider};
use std::time::Duration;

/// Path appended to the configured base URL
pub const CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// Provider backed by an OpenAI-compatible HTTP API
#[derive(Debug, Clone)]
pub struct OpenAiProvider {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl OpenAiProvider {
    /// Build from configuration
    ///
    /// # Errors
    /// Returns [`ProviderError::NotConfigured`] without a usable key and
    /// [`ProviderError::Transport`] if the HTTP client cannot be built
    pub fn from_config(config: &GeneratorConfig) -> Result<Self, ProviderError> {
        let api_key = config.api_key().ok_or(ProviderError::NotConfigured)?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ProviderError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: endpoint_url(&config.base_url),
            api_key: api_key.to_string(),
        })
    }

    /// Full completions URL
    #[inline]
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Join a base URL and [`CHAT_COMPLETIONS_PATH`]
#[must_use]
pub fn endpoint_url(base_url: &str) -> String {
    format!("{}{CHAT_COMPLETIONS_PATH}", base_url.trim_end_matches('/'))
}

#[async_trait]
impl TextProvider for OpenAiProvider {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, ProviderError> {
        tracing::debug!(model = %request.model, endpoint = %self.endpoint, "requesting completion");
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&ChatRequest::from(request))
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;
        if !status.is_success() {
            return Err(ProviderError::Status {
                status: status.as_u16(),
                message: body,
            });
        }
        parse_response(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base() {
        assert_eq!(
            endpoint_url("https://api.openai.com"),
            "https://api.openai.com/v1/chat/completions"
        );
        assert_eq!(
            endpoint_url("http://localhost:8080/"),
            "http://localhost:8080/v1/chat/completions"
        );
    }

    #[test]
    fn requires_key() {
        let err = OpenAiProvider::from_config(&GeneratorConfig::new()).unwrap_err();
        assert_eq!(err, ProviderError::NotConfigured);

        let provider =
            OpenAiProvider::from_config(&GeneratorConfig::new().with_api_key("sk-test")).unwrap();
        assert_eq!(provider.endpoint(), "https://api.openai.com/v1/chat/completions");
    }
}
