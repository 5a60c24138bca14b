//! Ollama provider for local models.
//!
//! Talks to the Ollama chat API (<https://ollama.ai>) on a local or remote
//! daemon. No API key required.

use super::{CompletionRequest, LlmProvider};
use anyhow::{anyhow, Result};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default Ollama daemon address.
const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Default model.
const DEFAULT_MODEL: &str = "llama2";

/// Default timeout for API requests in seconds. Local models can be slow on
/// long prompts.
const DEFAULT_TIMEOUT_SECS: u64 = 600;

/// Default temperature for model responses.
const DEFAULT_TEMPERATURE: f32 = 0.7;

#[derive(Debug, Serialize)]
struct OllamaChatRequest {
    model: String,
    messages: Vec<Message>,
    stream: bool,
    options: OllamaOptions,
}

#[derive(Debug, Serialize)]
struct OllamaOptions {
    temperature: f32,
}

#[derive(Debug, Serialize, Deserialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct OllamaChatResponse {
    message: Option<Message>,
}

/// Configuration for the Ollama provider.
#[derive(Debug, Clone)]
pub struct OllamaConfig {
    /// The model to use (e.g., "llama2", "mistral").
    pub model: String,
    /// Temperature for response generation.
    pub temperature: f32,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Daemon base URL without the API path, e.g. "http://localhost:11434".
    pub base_url: String,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl OllamaConfig {
    /// Create a new configuration builder.
    pub fn builder() -> OllamaConfigBuilder {
        OllamaConfigBuilder::default()
    }
}

/// Builder for [`OllamaConfig`].
#[derive(Default)]
pub struct OllamaConfigBuilder {
    model: Option<String>,
    temperature: Option<f32>,
    timeout_secs: Option<u64>,
    base_url: Option<String>,
}

impl OllamaConfigBuilder {
    /// Set the model to use.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the temperature.
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the request timeout in seconds.
    pub fn timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = Some(timeout_secs);
        self
    }

    /// Set the daemon base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Build the configuration.
    pub fn build(self) -> OllamaConfig {
        OllamaConfig {
            model: self.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            temperature: self.temperature.unwrap_or(DEFAULT_TEMPERATURE),
            timeout_secs: self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
            base_url: self.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }
}

/// Ollama provider for running crews against local models.
pub struct OllamaProvider {
    config: OllamaConfig,
    client: Client,
}

impl OllamaProvider {
    /// Create a new Ollama provider with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new() -> Result<Self> {
        Self::with_config(OllamaConfig::default())
    }

    /// Create a new Ollama provider with custom configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_config(config: OllamaConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| anyhow!("Failed to build HTTP client: {}", e))?;

        Ok(Self { config, client })
    }

    fn chat_url(&self) -> String {
        format!("{}/api/chat", self.config.base_url.trim_end_matches('/'))
    }

    fn call_api(&self, request: &CompletionRequest) -> Result<String> {
        let body = OllamaChatRequest {
            model: self.config.model.clone(),
            messages: vec![
                Message {
                    role: "system".to_string(),
                    content: request.system.clone(),
                },
                Message {
                    role: "user".to_string(),
                    content: request.prompt.clone(),
                },
            ],
            stream: false,
            options: OllamaOptions {
                temperature: self.config.temperature,
            },
        };

        let response = self
            .client
            .post(self.chat_url())
            .header("Content-Type", "application/json")
            .json(&body)
            .send()?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "Ollama API Error {}: {}",
                response.status(),
                response.text()?
            ));
        }

        let result: OllamaChatResponse = response.json()?;
        let text = result
            .message
            .map(|msg| msg.content)
            .ok_or_else(|| anyhow!("No response content from Ollama API"))?;

        Ok(text)
    }
}

impl LlmProvider for OllamaProvider {
    fn complete(&self, request: &CompletionRequest) -> Result<String> {
        self.call_api(request)
    }

    fn name(&self) -> &str {
        "Ollama"
    }

    fn model(&self) -> Option<&str> {
        Some(&self.config.model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_chat_response() {
        let json = r#"{
            "model": "llama2",
            "message": {"role": "assistant", "content": "Plan follows."},
            "done": true
        }"#;

        let response: OllamaChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.message.unwrap().content, "Plan follows.");
    }

    #[test]
    fn test_parse_response_without_message() {
        let json = r#"{"model": "llama2", "done": true}"#;
        let response: OllamaChatResponse = serde_json::from_str(json).unwrap();
        assert!(response.message.is_none());
    }

    #[test]
    fn test_config_builder_defaults() {
        let config = OllamaConfig::builder().build();

        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.temperature, DEFAULT_TEMPERATURE);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_chat_url_handles_trailing_slash() {
        let config = OllamaConfig::builder()
            .base_url("http://remote:11434/")
            .build();
        let provider = OllamaProvider::with_config(config).unwrap();
        assert_eq!(provider.chat_url(), "http://remote:11434/api/chat");
    }

    #[test]
    fn test_provider_name_and_model() {
        let provider = OllamaProvider::new().unwrap();
        assert_eq!(provider.name(), "Ollama");
        assert_eq!(provider.model(), Some(DEFAULT_MODEL));
    }
}
