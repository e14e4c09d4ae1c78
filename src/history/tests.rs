use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::*;
use crate::traits::{KeyValueStore, StoreError};

#[derive(Default)]
struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
    fail_writes: bool,
}

impl MemoryStore {
    fn with(key: &str, value: &str) -> Self {
        let store = MemoryStore::default();
        store
            .entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        store
    }

    fn raw(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }
}

impl KeyValueStore for Arc<MemoryStore> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.as_ref().get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.as_ref().set(key, value)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::WriteFailed {
                key: key.to_string(),
                reason: "storage quota exceeded".to_string(),
            });
        }
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

fn history_of(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn new_value_goes_to_front() {
    let current = history_of(&["b", "c"]);
    assert_eq!(update_history("a", &current), history_of(&["a", "b", "c"]));
}

#[test]
fn empty_value_is_a_noop() {
    let current = history_of(&["a", "b"]);
    assert_eq!(update_history("", &current), current);
    assert_eq!(update_history("", &[]), Vec::<String>::new());
}

#[test]
fn existing_value_moves_to_front_without_duplicating() {
    let current = history_of(&["a", "b", "c"]);
    let updated = update_history("b", &current);
    assert_eq!(updated, history_of(&["b", "a", "c"]));
    assert_eq!(updated.iter().filter(|v| *v == "b").count(), 1);
}

#[test]
fn capacity_is_enforced() {
    let current: Vec<String> = (0..HISTORY_CAPACITY).map(|i| format!("v{i}")).collect();
    let updated = update_history("fresh", &current);
    assert_eq!(updated.len(), HISTORY_CAPACITY);
    assert_eq!(updated[0], "fresh");
    // Oldest entry falls off the end.
    assert!(!updated.contains(&format!("v{}", HISTORY_CAPACITY - 1)));
}

#[test]
fn relative_order_of_survivors_is_preserved() {
    let current = history_of(&["x", "y", "z"]);
    let updated = update_history("y", &current);
    let survivors: Vec<_> = updated.iter().filter(|v| *v != "y").collect();
    assert_eq!(survivors, ["x", "z"]);
}

#[test]
fn tracked_fields_own_distinct_storage_keys() {
    let keys: Vec<_> = TrackedField::ALL.iter().map(|f| f.storage_key()).collect();
    assert_eq!(keys, ["urlHistory", "apiKeyHistory", "modelHistory"]);
}

#[test]
fn manager_loads_stored_history() {
    let store = MemoryStore::with("modelHistory", r#"["gpt-4o","gpt-4o-mini"]"#);
    let manager = HistoryManager::new(store);
    assert_eq!(
        manager.history(TrackedField::Model),
        history_of(&["gpt-4o", "gpt-4o-mini"])
    );
    assert!(manager.history(TrackedField::Endpoint).is_empty());
}

#[test]
fn malformed_stored_history_starts_empty() {
    let store = MemoryStore::with("urlHistory", "{not json");
    let manager = HistoryManager::new(store);
    assert!(manager.history(TrackedField::Endpoint).is_empty());
}

#[test]
fn confirm_updates_memory_and_storage() {
    let store = Arc::new(MemoryStore::default());
    let mut manager = HistoryManager::new(Arc::clone(&store));
    manager.confirm(TrackedField::Endpoint, "https://api.openai.com/v1/chat/completions");
    manager.confirm(TrackedField::Endpoint, "http://localhost:8080/v1/chat/completions");

    assert_eq!(
        manager.history(TrackedField::Endpoint),
        history_of(&[
            "http://localhost:8080/v1/chat/completions",
            "https://api.openai.com/v1/chat/completions",
        ])
    );
    let stored = store.raw("urlHistory").unwrap();
    let parsed: Vec<String> = serde_json::from_str(&stored).unwrap();
    assert_eq!(parsed, manager.history(TrackedField::Endpoint));
}

#[test]
fn confirm_with_empty_value_does_not_touch_storage() {
    let store = Arc::new(MemoryStore::with("apiKeyHistory", r#"["sk-old"]"#));
    let mut manager = HistoryManager::new(Arc::clone(&store));
    manager.confirm(TrackedField::ApiKey, "");
    assert_eq!(store.raw("apiKeyHistory").unwrap(), r#"["sk-old"]"#);
}

#[test]
fn fields_do_not_share_histories() {
    let mut manager = HistoryManager::new(MemoryStore::default());
    manager.confirm(TrackedField::Model, "gpt-4o");
    assert!(manager.history(TrackedField::Endpoint).is_empty());
    assert!(manager.history(TrackedField::ApiKey).is_empty());
}

#[test]
fn failed_persist_still_updates_memory() {
    let store = MemoryStore {
        fail_writes: true,
        ..MemoryStore::default()
    };
    let mut manager = HistoryManager::new(store);
    manager.confirm(TrackedField::Model, "gpt-4o");
    assert_eq!(manager.history(TrackedField::Model), history_of(&["gpt-4o"]));
}
