//! Tasknote LLM Provider Layer
//!
//! Pluggable LLM provider implementations.
//!
//! # Architecture
//!
//! This crate provides implementations of the `LlmProvider` trait from `tasknote-domain`.
//! It supports multiple LLM backends with a common interface.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `OllamaProvider`: Local Ollama chat API integration
//!
//! # Examples
//!
//! ```
//! use tasknote_llm::MockProvider;
//! use tasknote_domain::traits::LlmProvider;
//!
//! let provider = MockProvider::new(r#"{"items": []}"#);
//! let result = provider.generate("test prompt").unwrap();
//! assert_eq!(result, r#"{"items": []}"#);
//! ```

#![warn(missing_docs)]

pub mod ollama;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tasknote_domain::traits::LlmProvider as LlmProviderTrait;
use thiserror::Error;

pub use ollama::OllamaProvider;

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from LLM
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The output schema handed to the provider is not valid JSON
    #[error("Invalid schema: {0}")]
    InvalidSchema(String),

    /// Request did not complete within the configured timeout
    #[error("Request timed out")]
    Timeout,

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

#[derive(Debug, Clone)]
enum MockReply {
    Text(String),
    Error,
}

/// Mock LLM provider for deterministic testing
///
/// This provider returns pre-configured responses without making any network calls.
/// Every call is counted and the last prompt and schema are recorded, so tests
/// can assert both how often and with what the provider was invoked.
///
/// # Examples
///
/// ```
/// use tasknote_llm::MockProvider;
/// use tasknote_domain::traits::LlmProvider;
///
/// // Simple fixed response
/// let provider = MockProvider::new("Fixed response");
/// assert_eq!(provider.generate("any prompt").unwrap(), "Fixed response");
///
/// // Multiple responses
/// let mut provider = MockProvider::default();
/// provider.add_response("prompt1", "response1");
/// provider.add_response("prompt2", "response2");
/// assert_eq!(provider.generate("prompt1").unwrap(), "response1");
/// assert_eq!(provider.generate("prompt2").unwrap(), "response2");
/// assert_eq!(provider.call_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    responses: Arc<Mutex<HashMap<String, MockReply>>>,
    call_count: Arc<Mutex<usize>>,
    last_prompt: Arc<Mutex<Option<String>>>,
    last_schema: Arc<Mutex<Option<String>>>,
}

/// Lock a mutex, recovering the data if a panicking test poisoned it
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            responses: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
            last_prompt: Arc::new(Mutex::new(None)),
            last_schema: Arc::new(Mutex::new(None)),
        }
    }

    /// Create a MockProvider that answers every prompt with `{"items": [...]}`
    pub fn with_items<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items: Vec<String> = items.into_iter().map(Into::into).collect();
        Self::new(serde_json::json!({ "items": items }).to_string())
    }

    /// Add a specific response for a given prompt
    pub fn add_response(&mut self, prompt: impl Into<String>, response: impl Into<String>) {
        lock(&self.responses).insert(prompt.into(), MockReply::Text(response.into()));
    }

    /// Configure to return an error for a specific prompt
    pub fn add_error(&mut self, prompt: impl Into<String>) {
        lock(&self.responses).insert(prompt.into(), MockReply::Error);
    }

    /// Get the number of times the provider was called
    pub fn call_count(&self) -> usize {
        *lock(&self.call_count)
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        *lock(&self.call_count) = 0;
    }

    /// The prompt of the most recent call
    pub fn last_prompt(&self) -> Option<String> {
        lock(&self.last_prompt).clone()
    }

    /// The schema of the most recent structured call
    pub fn last_schema(&self) -> Option<String> {
        lock(&self.last_schema).clone()
    }

    fn reply(&self, prompt: &str) -> Result<String, LlmError> {
        *lock(&self.call_count) += 1;
        *lock(&self.last_prompt) = Some(prompt.to_string());

        match lock(&self.responses).get(prompt) {
            Some(MockReply::Text(response)) => Ok(response.clone()),
            Some(MockReply::Error) => Err(LlmError::Other("Mock error".to_string())),
            None => Ok(self.default_response.clone()),
        }
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

impl LlmProviderTrait for MockProvider {
    type Error = LlmError;

    fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        self.reply(prompt)
    }

    fn generate_structured(&self, prompt: &str, schema: &str) -> Result<String, Self::Error> {
        *lock(&self.last_schema) = Some(schema.to_string());
        self.reply(prompt)
    }
}
