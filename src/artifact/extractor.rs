//! Applies parsed artifacts to the sandbox and sanitizes display text.

use tracing::{debug, warn};

use super::parser::parse_blocks;
use crate::llm::ChatResponse;
use crate::traits::SandboxController;

/// Replace every well-formed artifact block in `content` with a
/// reference line, applying each to the sandbox on the way. A missing
/// sandbox or a failed write degrades to display-only: the reference
/// line is still emitted and the failure is logged, never surfaced.
///
/// Text without well-formed blocks comes back unchanged, so the text
/// transform is idempotent on its own output (sanitized text contains
/// no fences). Sandbox application is fire-and-forget: re-running on
/// the same raw content re-applies the writes.
pub fn process_artifacts(content: &str, sandbox: Option<&dyn SandboxController>) -> String {
    let blocks = parse_blocks(content);
    if blocks.is_empty() {
        return content.to_string();
    }

    let mut out = String::with_capacity(content.len());
    let mut cursor = 0;
    for block in &blocks {
        match sandbox {
            Some(sandbox) => match sandbox.write_file(&block.path, &block.body) {
                Ok(()) => {
                    debug!(path = %block.path, bytes = block.body.len(), "artifact applied")
                }
                Err(e) => {
                    warn!(path = %block.path, error = %e, "artifact apply failed, display-only")
                }
            },
            None => {
                warn!(path = %block.path, "sandbox unavailable, artifact shown as reference only")
            }
        }

        out.push_str(&content[cursor..block.span.0]);
        out.push_str("Updated `");
        out.push_str(&block.path);
        out.push('`');
        cursor = block.span.1;
    }
    out.push_str(&content[cursor..]);
    out
}

/// Run the artifact transform over every choice of a chat response.
/// Only `message.content` changes; all other fields pass through.
pub fn process_response(
    mut response: ChatResponse,
    sandbox: Option<&dyn SandboxController>,
) -> ChatResponse {
    for choice in &mut response.choices {
        choice.message.content = process_artifacts(&choice.message.content, sandbox);
    }
    response
}
