//! Tasknote Extractor
//!
//! Turns free-form note text into an ordered list of action items.
//!
//! # Overview
//!
//! Two interchangeable implementations of
//! [`ActionItemExtractor`](tasknote_domain::traits::ActionItemExtractor) live here:
//!
//! - [`HeuristicExtractor`]: line patterns (bullets, numbered lists, `todo:` style
//!   keywords, checkboxes), falling back to imperative sentences when no line matches.
//!   Results are deduplicated case-insensitively.
//! - [`LlmExtractor`]: asks an [`LlmProvider`](tasknote_domain::traits::LlmProvider)
//!   for a reply shaped like `{"items": [string]}` and returns the items verbatim.
//!
//! The caller chooses which one to run; neither falls back to the other.
//!
//! # Architecture
//!
//! ```text
//! Text → HeuristicExtractor ─────────────┐
//!      → LlmExtractor → LLM → parser ────┴→ Vec<String>
//! ```
//!
//! # Example Usage
//!
//! ```
//! use tasknote_domain::traits::ActionItemExtractor;
//! use tasknote_extractor::{ExtractorConfig, HeuristicExtractor, LlmExtractor};
//! use tasknote_llm::MockProvider;
//!
//! let heuristic = HeuristicExtractor::new();
//! let items = heuristic.extract("- [ ] Set up database\n1. Write tests").unwrap();
//! assert_eq!(items, vec!["Set up database", "Write tests"]);
//!
//! let llm = LlmExtractor::new(
//!     MockProvider::with_items(["Buy milk"]),
//!     ExtractorConfig::default(),
//! );
//! assert_eq!(llm.extract("todo: Buy milk").unwrap(), vec!["Buy milk"]);
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod heuristic;
mod llm;
mod parser;
mod prompt;


pub use config::ExtractorConfig;
pub use error::ExtractorError;
pub use heuristic::{extract_action_items, HeuristicExtractor, IMPERATIVE_STARTERS};
pub use llm::LlmExtractor;
pub use parser::{parse_action_items, ActionItems, ACTION_ITEMS_SCHEMA};
pub use prompt::PromptBuilder;
