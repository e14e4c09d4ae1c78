//! Persistence wrapper: one history list per tracked field, loaded once
//! at construction, written back on every confirmed value.

use std::collections::HashMap;

use tracing::{debug, warn};

use super::store::{update_history, TrackedField};
use crate::traits::KeyValueStore;

pub struct HistoryManager<S: KeyValueStore> {
    store: S,
    lists: HashMap<TrackedField, Vec<String>>,
}

impl<S: KeyValueStore> HistoryManager<S> {
    /// Loads the stored history for every tracked field. Missing or
    /// malformed entries start empty. Loading happens here, before any
    /// confirm is possible, so a confirm can never overwrite stored
    /// history with pre-load empty state.
    pub fn new(store: S) -> Self {
        let mut lists = HashMap::new();
        for field in TrackedField::ALL {
            lists.insert(field, load_list(&store, field));
        }
        Self { store, lists }
    }

    /// Current history for a field, most recent first.
    pub fn history(&self, field: TrackedField) -> &[String] {
        self.lists.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Record a confirmed field value and persist the updated list.
    /// An empty value leaves both memory and storage untouched.
    pub fn confirm(&mut self, field: TrackedField, value: &str) {
        let updated = update_history(value, self.history(field));
        if updated.as_slice() == self.history(field) {
            return;
        }

        match serde_json::to_string(&updated) {
            Ok(json) => {
                if let Err(e) = self.store.set(field.storage_key(), &json) {
                    warn!(key = field.storage_key(), error = %e, "history persist failed");
                }
            }
            Err(e) => warn!(key = field.storage_key(), error = %e, "history serialize failed"),
        }

        self.lists.insert(field, updated);
    }
}

fn load_list<S: KeyValueStore>(store: &S, field: TrackedField) -> Vec<String> {
    let key = field.storage_key();

    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!(key, error = %e, "history read failed");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<String>>(&raw) {
        Ok(list) => {
            debug!(key, entries = list.len(), "history loaded");
            list
        }
        Err(e) => {
            warn!(key, error = %e, "malformed stored history, starting empty");
            Vec::new()
        }
    }
}
