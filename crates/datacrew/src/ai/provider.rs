//! LLM provider trait for abstracting chat-completion backends.
//!
//! The crew runner only needs one capability from a backend: turn a system
//! prompt plus a user prompt into completion text. Everything else (auth,
//! wire format, retries) lives in the concrete providers.

use anyhow::Result;

/// A single completion call: one system prompt, one user prompt.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// Persona and standing instructions, sent as the system message.
    pub system: String,
    /// The task content, sent as the user message.
    pub prompt: String,
}

impl CompletionRequest {
    pub fn new(system: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            prompt: prompt.into(),
        }
    }
}

/// Trait for chat-completion backends.
///
/// Implementations must be `Send + Sync` so a single provider can drive all
/// agents in a crew run.
pub trait LlmProvider: Send + Sync {
    /// Run one completion and return the raw text of the reply.
    ///
    /// # Errors
    ///
    /// Returns an error if the API call fails or the response carries no
    /// usable text. The crew runner surfaces these as run failures; there is
    /// no silent fallback.
    fn complete(&self, request: &CompletionRequest) -> Result<String>;

    /// Provider name for logging, e.g. "OpenAI".
    fn name(&self) -> &str;

    /// The model in use, if the provider exposes one.
    fn model(&self) -> Option<&str> {
        None
    }
}
