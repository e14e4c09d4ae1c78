//! Session-wide holder of the system-prompt template.

use std::sync::{Arc, Mutex};

/// Cloneable handle to the current template, one per chat session.
/// Last writer wins; a new value only affects requests intercepted
/// after the set. Starts empty and is never persisted.
#[derive(Clone, Default)]
pub struct PromptContext {
    inner: Arc<Mutex<String>>,
}

impl PromptContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn system_prompt(&self) -> String {
        self.inner.lock().unwrap().clone()
    }

    pub fn set_system_prompt(&self, value: impl Into<String>) {
        *self.inner.lock().unwrap() = value.into();
    }
}
