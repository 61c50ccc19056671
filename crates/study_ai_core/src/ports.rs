//! crates/study_ai_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the application's core logic.
//! These traits form the boundary of the hexagonal architecture, allowing the
//! core to be independent of any specific LLM provider SDK.

use async_trait::async_trait;

/// A generic error type for all port operations.
/// This abstracts away the specific errors from external providers.
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("Provider is unavailable: {0}")]
    Unavailable(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

/// The single capability the assistant needs from an external provider:
/// turn a prompt into free text, within a token budget.
///
/// Implementations are tried in configuration order; any error (or empty
/// output) simply moves the chain along, ending at the rule-based fallback.
#[async_trait]
pub trait TextGenerationService: Send + Sync {
    /// A short identifier used as the `source` tag on delegated replies.
    fn name(&self) -> &str;

    /// Generates free text for the given prompt.
    async fn generate_text(&self, prompt: &str, max_tokens: u32) -> PortResult<String>;
}
