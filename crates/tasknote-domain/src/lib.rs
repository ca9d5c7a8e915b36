//! Tasknote Domain Layer
//!
//! Core model and trait seams for extracting action items from notes.
//! It has no framework dependencies and defines the concepts and
//! trait interfaces that the infrastructure crates implement.
//!
//! ## Key Concepts
//!
//! - **Note**: A persisted block of raw input text
//! - **Action Item**: A short task string extracted from note text
//! - **Extractor**: Anything that turns text into an ordered list of action items
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Infrastructure implementations live in other crates
//! - Trait definitions for all external interactions (LLM, storage, extraction)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod action_item;
pub mod note;
pub mod traits;

// Re-exports for convenience
pub use action_item::{ActionItem, ActionItemId};
pub use note::{Note, NoteId};
