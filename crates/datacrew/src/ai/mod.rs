//! LLM backends for the agent crew.
//!
//! Built around the [`LlmProvider`] trait, which abstracts a single
//! chat-completion call. Concrete implementations cover the backends the
//! CLI can select from the environment:
//!
//! - [`OpenAiProvider`] - OpenAI chat completions (requires `ai` feature)
//! - [`OllamaProvider`] - local models via an Ollama daemon (requires `ai` feature)
//! - [`GeminiProvider`] - Google Gemini API (requires `ai` feature)
//!
//! # Feature Flag
//!
//! The concrete providers require the `ai` feature (enabled by default).
//! The [`LlmProvider`] trait is always available for custom
//! implementations, so the library can be used without `reqwest` by
//! disabling default features.
//!
//! # Adding a New Provider
//!
//! 1. Create a new file (e.g., `src/ai/anthropic.rs`)
//! 2. Implement the [`LlmProvider`] trait
//! 3. Export the new provider in this module

mod provider;
pub use provider::{CompletionRequest, LlmProvider};

#[cfg(feature = "ai")]
mod gemini;
#[cfg(feature = "ai")]
mod ollama;
#[cfg(feature = "ai")]
mod openai;

#[cfg(feature = "ai")]
pub use gemini::{GeminiConfig, GeminiConfigBuilder, GeminiProvider};

#[cfg(feature = "ai")]
pub use ollama::{OllamaConfig, OllamaConfigBuilder, OllamaProvider};

#[cfg(feature = "ai")]
pub use openai::{OpenAiConfig, OpenAiConfigBuilder, OpenAiProvider};
