//! Ollama Provider Implementation
//!
//! Provides integration with Ollama's local chat API.
//!
//! # Features
//!
//! - Blocking HTTP communication with the `/api/chat` endpoint
//! - Configurable endpoint, model and request timeout
//! - Structured outputs via Ollama's `format` field (a JSON Schema)
//! - Deterministic sampling (temperature 0)
//!
//! Requests are not retried. A failed call surfaces as an [`LlmError`].
//!
//! # Examples
//!
//! ```no_run
//! use tasknote_llm::OllamaProvider;
//! use tasknote_domain::traits::LlmProvider;
//!
//! let provider = OllamaProvider::new("http://localhost:11434", "llama3.1:8b").unwrap();
//! let reply = provider.generate("Say hello").unwrap();
//! ```

use crate::LlmError;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tasknote_domain::traits::LlmProvider as LlmProviderTrait;
use tracing::debug;

/// Default Ollama API endpoint
pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434";

/// Default model when none is configured
pub const DEFAULT_MODEL: &str = "llama3.1:8b";

/// Default timeout for LLM requests (60 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Ollama API provider for local LLM inference
///
/// This provider communicates with a local Ollama instance through the chat API.
/// Each call sends exactly one user message.
#[derive(Debug, Clone)]
pub struct OllamaProvider {
    endpoint: String,
    model: String,
    timeout: Duration,
    client: reqwest::blocking::Client,
}

/// A single chat message
#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

/// Sampling options
#[derive(Debug, Serialize)]
struct ChatOptions {
    temperature: f32,
}

/// Request body for Ollama chat API
#[derive(Debug, Serialize)]
struct OllamaChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<serde_json::Value>,
    options: ChatOptions,
}

/// Response from Ollama chat API
#[derive(Debug, Deserialize)]
struct OllamaChatResponse {
    message: ChatMessage,
    #[allow(dead_code)]
    #[serde(default)]
    done: bool,
}

impl OllamaProvider {
    /// Create a new Ollama provider
    ///
    /// # Parameters
    ///
    /// - `endpoint`: Ollama API endpoint (e.g., "http://localhost:11434")
    /// - `model`: Model to use (e.g., "llama3.1:8b")
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::Other`] if the HTTP client cannot be built.
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>) -> Result<Self, LlmError> {
        Self::with_timeout(endpoint, model, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a new Ollama provider with an explicit request timeout
    pub fn with_timeout(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LlmError::Other(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            model: model.into(),
            timeout,
            client,
        })
    }

    /// Create a new Ollama provider against `http://localhost:11434`
    pub fn default_endpoint(model: impl Into<String>) -> Result<Self, LlmError> {
        Self::new(DEFAULT_ENDPOINT, model)
    }

    /// The model this provider talks to
    pub fn model(&self) -> &str {
        &self.model
    }

    /// The configured request timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Send one chat request and return the assistant message content
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Ollama is not running or the request times out
    /// - Model is not available
    /// - Response body is not a chat response
    pub fn chat(
        &self,
        prompt: &str,
        format: Option<serde_json::Value>,
    ) -> Result<String, LlmError> {
        let url = format!("{}/api/chat", self.endpoint);

        let request_body = OllamaChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            stream: false,
            format,
            options: ChatOptions { temperature: 0.0 },
        };

        debug!(model = %self.model, prompt_len = prompt.len(), "Sending Ollama chat request");

        let response = self
            .client
            .post(&url)
            .json(&request_body)
            .send()
            .map_err(|e| {
                if e.is_timeout() {
                    LlmError::Timeout
                } else {
                    LlmError::Communication(format!("Request failed: {}", e))
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(LlmError::ModelNotAvailable(self.model.clone()));
        }
        if !status.is_success() {
            let error_text = response
                .text()
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(LlmError::Communication(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let chat_response = response
            .json::<OllamaChatResponse>()
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        debug!(
            reply_len = chat_response.message.content.len(),
            "Received Ollama chat reply"
        );

        Ok(chat_response.message.content)
    }
}

impl LlmProviderTrait for OllamaProvider {
    type Error = LlmError;

    fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        self.chat(prompt, None)
    }

    fn generate_structured(&self, prompt: &str, schema: &str) -> Result<String, Self::Error> {
        let format: serde_json::Value = serde_json::from_str(schema)
            .map_err(|e| LlmError::InvalidSchema(e.to_string()))?;
        self.chat(prompt, Some(format))
    }
}
