//! LLM-backed action item extraction

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::parser::{parse_action_items, ACTION_ITEMS_SCHEMA};
use crate::prompt::PromptBuilder;
use std::fmt::Display;
use tasknote_domain::traits::{ActionItemExtractor, LlmProvider};
use tasknote_llm::OllamaProvider;
use tracing::{debug, info};

/// Extracts action items by asking an LLM for `{"items": [string]}`
///
/// Items are returned exactly as the model produced them: no trimming, no
/// deduplication. Provider failures and malformed replies are returned as
/// errors and are not retried.
pub struct LlmExtractor<L> {
    provider: L,
    config: ExtractorConfig,
}

impl<L> LlmExtractor<L>
where
    L: LlmProvider,
    L::Error: Display,
{
    /// Create a new extractor around a provider
    pub fn new(provider: L, config: ExtractorConfig) -> Self {
        Self { provider, config }
    }

    /// The configuration this extractor was built with
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Access the underlying provider
    pub fn provider(&self) -> &L {
        &self.provider
    }
}

impl LlmExtractor<OllamaProvider> {
    /// Build an extractor backed by Ollama from configuration
    ///
    /// # Errors
    ///
    /// Returns [`ExtractorError::Config`] if the configuration is invalid or
    /// the HTTP client cannot be created.
    pub fn from_config(config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;

        let provider = OllamaProvider::with_timeout(
            config.endpoint.clone(),
            config.model.clone(),
            config.timeout(),
        )
        .map_err(|e| ExtractorError::Config(e.to_string()))?;

        info!(
            "LLM extractor using model '{}' at {} (timeout {}s)",
            config.model, config.endpoint, config.timeout_secs
        );

        Ok(Self::new(provider, config))
    }
}

impl<L> ActionItemExtractor for LlmExtractor<L>
where
    L: LlmProvider,
    L::Error: Display,
{
    type Error = ExtractorError;

    fn extract(&self, text: &str) -> Result<Vec<String>, Self::Error> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        let prompt = PromptBuilder::new(text).build();
        debug!(model = %self.config.model, "Prompt length: {} chars", prompt.len());

        let reply = self
            .provider
            .generate_structured(&prompt, ACTION_ITEMS_SCHEMA)
            .map_err(|e| ExtractorError::Llm(e.to_string()))?;

        debug!("LLM response length: {} chars", reply.len());

        let items = parse_action_items(&reply)?;
        info!("LLM returned {} action items", items.len());
        Ok(items)
    }
}
