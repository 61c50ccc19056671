//! services/api/src/adapters/gemini_llm.rs
//!
//! This module contains the adapter for the Google Gemini text-generation
//! provider, reached through its OpenAI-compatible endpoint so the same
//! client library serves both providers.

use async_openai::{
    config::OpenAIConfig,
    error::OpenAIError,
    types::chat::{ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs},
    Client,
};
use async_trait::async_trait;
use study_ai_core::ports::{PortError, PortResult, TextGenerationService};

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// An adapter that implements `TextGenerationService` against Gemini's
/// OpenAI-compatible chat-completions endpoint.
#[derive(Clone)]
pub struct GeminiTextAdapter {
    client: Client<OpenAIConfig>,
    model: String,
}

impl GeminiTextAdapter {
    /// Creates a new `GeminiTextAdapter`. The base URL points at the
    /// OpenAI-compatibility layer of the Gemini API.
    pub fn new(api_key: &str, base_url: &str, model: String) -> Self {
        let config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(base_url);
        Self {
            client: Client::with_config(config),
            model,
        }
    }
}

//=========================================================================================
// `TextGenerationService` Trait Implementation
//=========================================================================================

#[async_trait]
impl TextGenerationService for GeminiTextAdapter {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate_text(&self, prompt: &str, max_tokens: u32) -> PortResult<String> {
        let messages = vec![ChatCompletionRequestUserMessageArgs::default()
            .content(prompt.to_string())
            .build()
            .map_err(|e| PortError::Unexpected(e.to_string()))?
            .into()];

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .max_completion_tokens(max_tokens)
            .n(1)
            .build()
            .map_err(|e| PortError::Unexpected(e.to_string()))?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e: OpenAIError| PortError::Unavailable(e.to_string()))?;

        if let Some(choice) = response.choices.into_iter().next() {
            if let Some(content) = choice.message.content {
                Ok(content)
            } else {
                Err(PortError::Unexpected(
                    "Gemini response contained no text content.".to_string(),
                ))
            }
        } else {
            Err(PortError::Unexpected(
                "Gemini returned no choices in its response.".to_string(),
            ))
        }
    }
}
