//! Action item module - a single task extracted from note text

use crate::note::NoteId;
use std::fmt;

/// Identifier of a persisted action item (SQLite rowid)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ActionItemId(i64);

impl ActionItemId {
    /// Wrap a raw row id
    pub fn from_value(value: i64) -> Self {
        Self(value)
    }

    /// Get the raw row id
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ActionItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ActionItemId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// An action item as stored
///
/// Created in batches as a side effect of an extraction call. `done` is the
/// only field that changes after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionItem {
    /// Unique identifier
    pub id: ActionItemId,

    /// Note this item was extracted from, if the note was saved
    pub note_id: Option<NoteId>,

    /// Cleaned task text (no bullet, checkbox or keyword prefix)
    pub text: String,

    /// Completion flag
    pub done: bool,

    /// Creation timestamp as recorded by the store (`YYYY-MM-DD HH:MM:SS`, UTC)
    pub created_at: String,
}

impl ActionItem {
    /// Whether this item belongs to the given note
    pub fn belongs_to(&self, note_id: NoteId) -> bool {
        self.note_id == Some(note_id)
    }
}
