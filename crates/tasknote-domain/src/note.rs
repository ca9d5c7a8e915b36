//! Note module - the raw text a caller chose to keep

use std::fmt;

/// Identifier of a persisted note (SQLite rowid)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NoteId(i64);

impl NoteId {
    /// Wrap a raw row id
    pub fn from_value(value: i64) -> Self {
        Self(value)
    }

    /// Get the raw row id
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for NoteId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// A note as stored
///
/// Notes are immutable once created. Action items may reference a note
/// through [`crate::ActionItem::note_id`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    /// Unique identifier
    pub id: NoteId,

    /// Raw (trimmed) note text
    pub content: String,

    /// Creation timestamp as recorded by the store (`YYYY-MM-DD HH:MM:SS`, UTC)
    pub created_at: String,
}
