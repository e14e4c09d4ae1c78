//! Wire types for the chat-completion contract.
//!
//! Transport is owned by the host widget; this crate only touches the
//! two mutation points on the payload: `system_prompt` on the way out,
//! `choices[].message.content` on the way back.

pub mod schema;

pub use schema::*;
