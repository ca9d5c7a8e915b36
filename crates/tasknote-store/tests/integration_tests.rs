//! Integration tests for tasknote-store
//!
//! These tests verify the full CRUD cycle for notes and action items.

use tasknote_domain::traits::NoteStore;
use tasknote_domain::{ActionItemId, NoteId};
use tasknote_store::{SqliteStore, StoreError};

fn items(texts: &[&str]) -> Vec<String> {
    texts.iter().map(|t| t.to_string()).collect()
}

#[test]
fn test_store_initialization() {
    let store = SqliteStore::new(":memory:");
    assert!(store.is_ok(), "Store should initialize successfully");
}

#[test]
fn test_insert_and_get_note() {
    let mut store = SqliteStore::new(":memory:").unwrap();

    let id = store.insert_note("- [ ] Set up database").unwrap();
    let note = store.get_note(id).unwrap().expect("note should exist");

    assert_eq!(note.id, id);
    assert_eq!(note.content, "- [ ] Set up database");
    assert_eq!(note.created_at.len(), "2024-01-01 00:00:00".len());
}

#[test]
fn test_get_missing_note() {
    let store = SqliteStore::new(":memory:").unwrap();
    assert!(store.get_note(NoteId::from_value(99)).unwrap().is_none());
}

#[test]
fn test_list_notes_newest_first() {
    let mut store = SqliteStore::new(":memory:").unwrap();

    let first = store.insert_note("first").unwrap();
    let second = store.insert_note("second").unwrap();

    let notes = store.list_notes().unwrap();
    let ids: Vec<_> = notes.iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![second, first]);
}

#[test]
fn test_insert_action_items_preserves_order() {
    let mut store = SqliteStore::new(":memory:").unwrap();

    let texts = items(&["Set up database", "implement API extract endpoint", "Write tests"]);
    let ids = store.insert_action_items(&texts, None).unwrap();

    assert_eq!(ids.len(), 3);
    assert!(ids.windows(2).all(|w| w[0] < w[1]), "ids should follow input order");

    for (id, text) in ids.iter().zip(&texts) {
        let item = store.get_action_item(*id).unwrap().unwrap();
        assert_eq!(&item.text, text);
        assert!(!item.done);
        assert!(item.note_id.is_none());
    }
}

#[test]
fn test_insert_no_action_items() {
    let mut store = SqliteStore::new(":memory:").unwrap();
    let ids = store.insert_action_items(&[], None).unwrap();
    assert!(ids.is_empty());
    assert!(store.list_action_items(None).unwrap().is_empty());
}

#[test]
fn test_action_items_reference_existing_note() {
    let mut store = SqliteStore::new(":memory:").unwrap();

    let result = store.insert_action_items(&items(&["orphan"]), Some(NoteId::from_value(42)));
    assert!(
        matches!(result, Err(StoreError::Database(_))),
        "foreign key should reject unknown note"
    );
}

#[test]
fn test_list_action_items_filtered_by_note() {
    let mut store = SqliteStore::new(":memory:").unwrap();

    let note_a = store.insert_note("a").unwrap();
    let note_b = store.insert_note("b").unwrap();
    store.insert_action_items(&items(&["a1", "a2"]), Some(note_a)).unwrap();
    store.insert_action_items(&items(&["b1"]), Some(note_b)).unwrap();
    store.insert_action_items(&items(&["loose"]), None).unwrap();

    let all = store.list_action_items(None).unwrap();
    let texts: Vec<_> = all.iter().map(|i| i.text.as_str()).collect();
    assert_eq!(texts, vec!["loose", "b1", "a2", "a1"]);

    let for_a = store.list_action_items(Some(note_a)).unwrap();
    assert_eq!(for_a.len(), 2);
    assert!(for_a.iter().all(|i| i.belongs_to(note_a)));

    let for_b = store.list_action_items(Some(note_b)).unwrap();
    assert_eq!(for_b.len(), 1);
    assert_eq!(for_b[0].text, "b1");
}

#[test]
fn test_mark_done_round_trip() {
    let mut store = SqliteStore::new(":memory:").unwrap();

    let note = store.insert_note("- Write tests").unwrap();
    let ids = store.insert_action_items(&items(&["Write tests"]), Some(note)).unwrap();
    let id = ids[0];

    store.mark_action_item_done(id, true).unwrap();
    let listed = store.list_action_items(Some(note)).unwrap();
    let item = listed.iter().find(|i| i.id == id).unwrap();
    assert!(item.done);

    // Idempotent under repeated calls with the same value
    store.mark_action_item_done(id, true).unwrap();
    assert!(store.get_action_item(id).unwrap().unwrap().done);

    store.mark_action_item_done(id, false).unwrap();
    assert!(!store.get_action_item(id).unwrap().unwrap().done);
}

#[test]
fn test_mark_done_missing_id() {
    let mut store = SqliteStore::new(":memory:").unwrap();

    let result = store.mark_action_item_done(ActionItemId::from_value(7), true);
    assert!(matches!(result, Err(StoreError::NotFound(id)) if id.value() == 7));
}

#[test]
fn test_persistence_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("app.db");

    let id = {
        let mut store = SqliteStore::new(&path).unwrap();
        let note = store.insert_note("keep me").unwrap();
        store.insert_action_items(&items(&["keep me"]), Some(note)).unwrap()[0]
    };

    let store = SqliteStore::new(&path).unwrap();
    let item = store.get_action_item(id).unwrap().unwrap();
    assert_eq!(item.text, "keep me");
    assert!(item.note_id.is_some());
}
