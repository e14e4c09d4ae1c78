//! Bounded most-recently-used history for user-entered settings fields.

pub mod manager;
pub mod store;

pub use manager::HistoryManager;
pub use store::{update_history, TrackedField, HISTORY_CAPACITY};

#[cfg(test)]
mod tests;
