//! Pure MRU list logic.

/// Maximum number of remembered values per field.
pub const HISTORY_CAPACITY: usize = 10;

/// Settings fields with a persisted value history. Each field owns an
/// independent storage key; sharing one key between fields is
/// unsupported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackedField {
    Endpoint,
    ApiKey,
    Model,
}

impl TrackedField {
    pub const ALL: [TrackedField; 3] = [
        TrackedField::Endpoint,
        TrackedField::ApiKey,
        TrackedField::Model,
    ];

    /// Storage key for this field's serialized history.
    pub fn storage_key(self) -> &'static str {
        match self {
            TrackedField::Endpoint => "urlHistory",
            TrackedField::ApiKey => "apiKeyHistory",
            TrackedField::Model => "modelHistory",
        }
    }
}

/// Move `value` to the front of `current`, deduplicated and capped at
/// [`HISTORY_CAPACITY`]. An empty `value` is a no-op so unset fields
/// never pollute history.
pub fn update_history(value: &str, current: &[String]) -> Vec<String> {
    if value.is_empty() {
        return current.to_vec();
    }

    let mut updated = Vec::with_capacity(current.len() + 1);
    updated.push(value.to_string());
    updated.extend(current.iter().filter(|v| v.as_str() != value).cloned());
    updated.truncate(HISTORY_CAPACITY);
    updated
}
