//! Collaborator seams owned by the host application.

use std::collections::BTreeMap;

#[derive(Debug, thiserror::Error)]
pub enum SandboxError {
    #[error("sandbox write failed for `{path}`: {reason}")]
    WriteFailed { path: String, reason: String },
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage read failed for key `{key}`: {reason}")]
    ReadFailed { key: String, reason: String },

    #[error("storage write failed for key `{key}`: {reason}")]
    WriteFailed { key: String, reason: String },
}

/// The in-browser project file tree, owned by the host UI.
pub trait SandboxController: Send + Sync {
    /// Snapshot of the current file tree, path → content.
    fn files(&self) -> BTreeMap<String, String>;

    /// Create-or-overwrite a file. Conflict resolution is the
    /// controller's concern, not the caller's.
    fn write_file(&self, path: &str, content: &str) -> Result<(), SandboxError>;
}

/// Persistent key-value storage (e.g. the browser's local storage).
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}
