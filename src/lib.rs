//! # Sandchat Core
//!
//! Message-interception pipeline for a chat widget embedded in a
//! code-sandbox UI. The widget itself (rendering, transport, settings
//! forms) lives in the host application; this crate owns the two points
//! where the chat payload is rewritten:
//!
//! ```text
//! user message → prompt (inject system prompt + file list) → LLM endpoint
//!                                                               ↓
//! rendered text ← artifact (apply file mutations, sanitize) ← response
//! ```
//!
//! Orthogonally, `history` keeps bounded most-recently-used lists of the
//! user-entered settings values (endpoint URL, API key, model name),
//! persisted through an external key-value store.
//!
//! All external state (the sandbox file tree, the key-value store)
//! enters through the traits in [`traits`], so every piece runs against
//! fakes in tests.

pub mod artifact;
pub mod history;
pub mod llm;
pub mod pipeline;
pub mod prompt;
pub mod traits;

pub use pipeline::MessageInterceptor;
