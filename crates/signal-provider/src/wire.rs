//! Chat-completions wire format

use serde::{Deserialize, Serialize};
use signal_core::{CompletionRequest, ProviderError};

/// Chat message role for the single instruction turn
pub(crate) const USER_ROLE: &str = "user";

#[derive(Debug, Serialize)]
pub(crate) struct ChatRequest<'a> {
    pub(crate) model: &'a str,
    pub(crate) messages: [ChatMessage<'a>; 1],
    pub(crate) max_tokens: u32,
    pub(crate) temperature: f32,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatMessage<'a> {
    pub(crate) role: &'a str,
    pub(crate) content: &'a str,
}

impl<'a> From<&'a CompletionRequest> for ChatRequest<'a> {
    fn from(request: &'a CompletionRequest) -> Self {
        Self {
            model: &request.model,
            messages: [ChatMessage {
                role: USER_ROLE,
                content: &request.prompt,
            }],
            max_tokens: request.max_output_tokens,
            temperature: request.temperature,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl ChatResponse {
    /// Text of the first choice
    pub(crate) fn into_text(self) -> Result<String, ProviderError> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .ok_or_else(|| ProviderError::EmptyResponse("no message content in first choice".to_string()))
    }
}

/// Decode a response body
pub(crate) fn parse_response(body: &str) -> Result<String, ProviderError> {
    serde_json::from_str::<ChatResponse>(body)
        .map_err(|e| ProviderError::EmptyResponse(format!("undecodable response: {e}")))?
        .into_text()
}
