//! Configuration for the LLM extraction path

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tasknote_llm::ollama::{DEFAULT_ENDPOINT, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS};

/// Configuration for the [`LlmExtractor`](crate::LlmExtractor)
///
/// Resolved once at startup and passed in at construction; nothing in the
/// extractor reads the environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Ollama API endpoint
    pub endpoint: String,

    /// Model identifier sent with every request
    pub model: String,

    /// Maximum time for a single LLM call (seconds)
    pub timeout_secs: u64,
}

impl ExtractorConfig {
    /// Get the LLM timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Replace the model if an override is present
    ///
    /// Used for the `OLLAMA_MODEL` / `--model` override; empty values are ignored.
    pub fn with_model_override(mut self, model: Option<String>) -> Self {
        if let Some(model) = model.filter(|m| !m.trim().is_empty()) {
            self.model = model.trim().to_string();
        }
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.endpoint.trim().is_empty() {
            return Err("endpoint must not be empty".to_string());
        }
        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            return Err(format!("endpoint must be an http(s) URL, got '{}'", self.endpoint));
        }
        if self.model.trim().is_empty() {
            return Err("model must not be empty".to_string());
        }
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}
