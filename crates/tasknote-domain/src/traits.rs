//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use crate::{ActionItem, ActionItemId, Note, NoteId};

/// Trait for turning free-form text into action items
///
/// Implemented by the application layer (tasknote-extractor). The caller picks
/// an implementation; implementations never fall back to one another.
pub trait ActionItemExtractor {
    /// Error type for extraction operations
    type Error;

    /// Extract an ordered list of action items from text
    fn extract(&self, text: &str) -> Result<Vec<String>, Self::Error>;
}

/// Trait for LLM provider operations
///
/// Implemented by the infrastructure layer (tasknote-llm)
pub trait LlmProvider {
    /// Error type for LLM operations
    type Error;

    /// Generate text completion
    fn generate(&self, prompt: &str) -> Result<String, Self::Error>;

    /// Generate a reply constrained to the given JSON Schema document
    fn generate_structured(&self, prompt: &str, schema: &str) -> Result<String, Self::Error>;
}

/// Trait for storing notes and action items
///
/// Implemented by the infrastructure layer (tasknote-store)
pub trait NoteStore {
    /// Error type for store operations
    type Error;

    /// Persist a note and return its id
    fn insert_note(&mut self, content: &str) -> Result<NoteId, Self::Error>;

    /// Get a note by id
    fn get_note(&self, id: NoteId) -> Result<Option<Note>, Self::Error>;

    /// List all notes, newest first
    fn list_notes(&self) -> Result<Vec<Note>, Self::Error>;

    /// Persist action items, returning one id per item in input order
    fn insert_action_items(
        &mut self,
        items: &[String],
        note_id: Option<NoteId>,
    ) -> Result<Vec<ActionItemId>, Self::Error>;

    /// List action items, newest first, optionally restricted to one note
    fn list_action_items(&self, note_id: Option<NoteId>) -> Result<Vec<ActionItem>, Self::Error>;

    /// Get an action item by id
    fn get_action_item(&self, id: ActionItemId) -> Result<Option<ActionItem>, Self::Error>;

    /// Set the completion flag of an action item; fails if the id is unknown
    fn mark_action_item_done(&mut self, id: ActionItemId, done: bool) -> Result<(), Self::Error>;
}
