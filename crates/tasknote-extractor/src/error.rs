//! Error types for the Extractor

use serde_json::error::Category;
use thiserror::Error;

/// Errors that can occur during extraction
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// LLM provider error (unreachable service, timeout, unknown model)
    #[error("LLM error: {0}")]
    Llm(String),

    /// LLM reply was JSON but not shaped like `{"items": [string]}`
    #[error("Invalid action item format: {0}")]
    InvalidFormat(String),

    /// LLM reply was not JSON at all
    #[error("JSON parse error: {0}")]
    JsonParse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for ExtractorError {
    fn from(e: serde_json::Error) -> Self {
        match e.classify() {
            Category::Data => ExtractorError::InvalidFormat(e.to_string()),
            Category::Syntax | Category::Eof | Category::Io => {
                ExtractorError::JsonParse(e.to_string())
            }
        }
    }
}
