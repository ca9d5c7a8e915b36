//! Request and response bodies for the HTTP API.

use serde::{Deserialize, Serialize};
use tasknote_domain::{ActionItem, Note};

/// Body of `POST /action-items/extract` and `POST /action-items/extract-llm`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractRequest {
    /// Note text to extract from
    pub text: String,

    /// Persist the (trimmed) text as a note and link the items to it
    #[serde(default)]
    pub save_note: bool,
}

/// Body of `POST /action-items/{id}/done`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkDoneRequest {
    /// New completion flag
    #[serde(default = "default_done")]
    pub done: bool,
}

fn default_done() -> bool {
    true
}

/// Body of `POST /notes`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteCreate {
    /// Note text
    pub content: String,
}

/// Query string of `GET /action-items`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    /// Only items extracted from this note
    pub note_id: Option<i64>,
}

/// A freshly extracted action item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionItemResponse {
    /// Row id
    pub id: i64,
    /// Cleaned task text
    pub text: String,
}

/// Result of an extraction call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractResponse {
    /// Id of the saved note, when `save_note` was set
    pub note_id: Option<i64>,
    /// Extracted items in extraction order
    pub items: Vec<ActionItemResponse>,
}

/// A stored action item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionItemDetail {
    /// Row id
    pub id: i64,
    /// Source note, if one was saved
    pub note_id: Option<i64>,
    /// Cleaned task text
    pub text: String,
    /// Completion flag
    pub done: bool,
    /// Creation timestamp
    pub created_at: String,
}

impl From<ActionItem> for ActionItemDetail {
    fn from(item: ActionItem) -> Self {
        Self {
            id: item.id.value(),
            note_id: item.note_id.map(|id| id.value()),
            text: item.text,
            done: item.done,
            created_at: item.created_at,
        }
    }
}

/// Result of marking an item done
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkDoneResponse {
    /// Row id
    pub id: i64,
    /// Completion flag after the update
    pub done: bool,
}

/// A stored note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteResponse {
    /// Row id
    pub id: i64,
    /// Note text
    pub content: String,
    /// Creation timestamp
    pub created_at: String,
}

impl From<Note> for NoteResponse {
    fn from(note: Note) -> Self {
        Self {
            id: note.id.value(),
            content: note.content,
            created_at: note.created_at,
        }
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Always "ok" when the server answers
    pub status: String,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Caller-facing error message
    pub detail: String,
}
