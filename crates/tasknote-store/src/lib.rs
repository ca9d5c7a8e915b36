//! Tasknote Storage Layer
//!
//! Implements the NoteStore trait using SQLite.
//!
//! # Architecture
//!
//! - `notes`: raw note text, immutable once written
//! - `action_items`: extracted tasks with an optional foreign key to `notes`
//!
//! There are no transactions spanning a note and its action items; a failure
//! between the two inserts can leave a note without items.
//!
//! # Examples
//!
//! ```
//! use tasknote_domain::traits::NoteStore;
//! use tasknote_store::SqliteStore;
//!
//! let mut store = SqliteStore::new(":memory:").unwrap();
//! let note_id = store.insert_note("- Write tests").unwrap();
//! let ids = store
//!     .insert_action_items(&["Write tests".to_string()], Some(note_id))
//!     .unwrap();
//! assert_eq!(ids.len(), 1);
//! ```

#![warn(missing_docs)]

use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use tasknote_domain::traits::NoteStore;
use tasknote_domain::{ActionItem, ActionItemId, Note, NoteId};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Failed to create the database directory
    #[error("Failed to create database directory: {0}")]
    Io(#[from] std::io::Error),

    /// Action item not found
    #[error("Action item not found: {0}")]
    NotFound(ActionItemId),
}

/// SQLite-based implementation of NoteStore
///
/// # Thread Safety
///
/// SQLite connections are not thread-safe. Share a store across threads
/// behind a `Mutex`, or give each thread its own SqliteStore instance.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Create a new SqliteStore with the given database path
    ///
    /// Use `:memory:` for an in-memory database (useful for testing). Parent
    /// directories of an on-disk path are created if missing.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use tasknote_store::SqliteStore;
    ///
    /// let store = SqliteStore::new("data/app.db").unwrap();
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        let mut store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&mut self) -> Result<(), StoreError> {
        self.conn.pragma_update(None, "foreign_keys", true)?;
        self.conn.execute_batch(include_str!("schema.sql"))?;
        Ok(())
    }

    fn row_to_note(row: &Row<'_>) -> rusqlite::Result<Note> {
        Ok(Note {
            id: NoteId::from_value(row.get(0)?),
            content: row.get(1)?,
            created_at: row.get(2)?,
        })
    }

    fn row_to_action_item(row: &Row<'_>) -> rusqlite::Result<ActionItem> {
        let note_id: Option<i64> = row.get(1)?;
        Ok(ActionItem {
            id: ActionItemId::from_value(row.get(0)?),
            note_id: note_id.map(NoteId::from_value),
            text: row.get(2)?,
            done: row.get::<_, i64>(3)? != 0,
            created_at: row.get(4)?,
        })
    }
}

impl NoteStore for SqliteStore {
    type Error = StoreError;

    fn insert_note(&mut self, content: &str) -> Result<NoteId, Self::Error> {
        self.conn
            .execute("INSERT INTO notes (content) VALUES (?1)", params![content])?;
        let id = NoteId::from_value(self.conn.last_insert_rowid());
        debug!("Inserted note {}", id);
        Ok(id)
    }

    fn get_note(&self, id: NoteId) -> Result<Option<Note>, Self::Error> {
        let note = self
            .conn
            .query_row(
                "SELECT id, content, created_at FROM notes WHERE id = ?1",
                params![id.value()],
                Self::row_to_note,
            )
            .optional()?;
        Ok(note)
    }

    fn list_notes(&self) -> Result<Vec<Note>, Self::Error> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, content, created_at FROM notes ORDER BY id DESC")?;
        let notes = stmt
            .query_map([], Self::row_to_note)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(notes)
    }

    fn insert_action_items(
        &mut self,
        items: &[String],
        note_id: Option<NoteId>,
    ) -> Result<Vec<ActionItemId>, Self::Error> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let note_id = note_id.map(|id| id.value());
        let mut stmt = self
            .conn
            .prepare("INSERT INTO action_items (note_id, text) VALUES (?1, ?2)")?;

        let mut ids = Vec::with_capacity(items.len());
        for item in items {
            let rowid = stmt.insert(params![note_id, item])?;
            ids.push(ActionItemId::from_value(rowid));
        }

        debug!("Inserted {} action items (note: {:?})", ids.len(), note_id);
        Ok(ids)
    }

    fn list_action_items(&self, note_id: Option<NoteId>) -> Result<Vec<ActionItem>, Self::Error> {
        const COLUMNS: &str = "SELECT id, note_id, text, done, created_at FROM action_items";

        let items = match note_id {
            Some(note_id) => {
                let mut stmt =
                    self.conn
                        .prepare(&format!("{} WHERE note_id = ?1 ORDER BY id DESC", COLUMNS))?;
                let rows = stmt.query_map(params![note_id.value()], Self::row_to_action_item)?;
                rows.collect::<Result<Vec<_>, _>>()?
            }
            None => {
                let mut stmt = self.conn.prepare(&format!("{} ORDER BY id DESC", COLUMNS))?;
                let rows = stmt.query_map([], Self::row_to_action_item)?;
                rows.collect::<Result<Vec<_>, _>>()?
            }
        };

        Ok(items)
    }

    fn get_action_item(&self, id: ActionItemId) -> Result<Option<ActionItem>, Self::Error> {
        let item = self
            .conn
            .query_row(
                "SELECT id, note_id, text, done, created_at FROM action_items WHERE id = ?1",
                params![id.value()],
                Self::row_to_action_item,
            )
            .optional()?;
        Ok(item)
    }

    fn mark_action_item_done(&mut self, id: ActionItemId, done: bool) -> Result<(), Self::Error> {
        let changed = self.conn.execute(
            "UPDATE action_items SET done = ?1 WHERE id = ?2",
            params![done as i64, id.value()],
        )?;

        if changed == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_foreign_keys_enabled() {
        let store = SqliteStore::new(":memory:").unwrap();
        let enabled: i64 = store
            .conn
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(enabled, 1);
    }

    #[test]
    fn test_schema_is_idempotent() {
        let mut store = SqliteStore::new(":memory:").unwrap();
        assert!(store.initialize_schema().is_ok());
    }
}
