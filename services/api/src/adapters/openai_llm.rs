//! services/api/src/adapters/openai_llm.rs
//!
//! This module contains the adapter for the OpenAI text-generation
//! provider. It implements the `TextGenerationService` port from the
//! `core` crate over the chat-completions API.

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

/// An adapter that implements `TextGenerationService` using the OpenAI
/// chat-completions API.
#[derive(Clone)]
pub struct OpenAiTextAdapter {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiTextAdapter {
    /// Creates a new `OpenAiTextAdapter`.
    pub fn new(client: Client<OpenAIConfig>, model: String) -> Self {
        Self { client, model }
    }
}

//=========================================================================================
// `TextGenerationService` Trait Implementation
//=========================================================================================

#[async_trait]
impl TextGenerationService for OpenAiTextAdapter {
    fn name(&self) -> &str {
        "openai"
    }

    /// Generates free text for the given prompt within the token budget.
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

        // Call the API and manually map the error if it occurs.
        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e: OpenAIError| PortError::Unavailable(e.to_string()))?;

        // Extract the text content from the first choice in the response.
        if let Some(choice) = response.choices.into_iter().next() {
            if let Some(content) = choice.message.content {
                Ok(content)
            } else {
                Err(PortError::Unexpected(
                    "OpenAI response contained no text content.".to_string(),
                ))
            }
        } else {
            Err(PortError::Unexpected(
                "OpenAI returned no choices in its response.".to_string(),
            ))
        }
    }
}
