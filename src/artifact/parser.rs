//! Fence scanning for `file:`-tagged artifact blocks.
//!
//! A well-formed block is a fenced region whose opening fence carries
//! the target path:
//!
//! ````text
//! ```file:src/App.ts
//! <full replacement body>
//! ```
//! ````
//!
//! The opening fence must start a line and name a non-empty path; the
//! closing fence is a line consisting of exactly three backticks.
//! Anything else (missing path, unterminated fence) is malformed and
//! stays verbatim in the text.

/// Opening fence marker, immediately followed by the target path.
pub const FENCE_OPEN: &str = "```file:";

const FENCE_CLOSE: &str = "```";

#[derive(Debug, Clone, PartialEq)]
pub struct ArtifactBlock {
    pub path: String,
    pub body: String,
    /// Byte range of the whole block in the source text, fences
    /// included, exclusive of the newline after the closing fence.
    pub span: (usize, usize),
}

/// Well-formed artifact blocks in order of appearance. Malformed
/// blocks are skipped, never partially parsed.
pub fn parse_blocks(content: &str) -> Vec<ArtifactBlock> {
    let mut blocks = Vec::new();
    let mut cursor = 0;

    while let Some(rel) = content[cursor..].find(FENCE_OPEN) {
        let open = cursor + rel;

        // The fence only counts at the start of a line; an inline
        // mention of the marker is plain text.
        if open > 0 && content.as_bytes()[open - 1] != b'\n' {
            cursor = open + FENCE_OPEN.len();
            continue;
        }

        let header_end = match content[open..].find('\n') {
            Some(i) => open + i,
            // Header is the last line: no room left for a body or a
            // closing fence.
            None => break,
        };

        let path = content[open + FENCE_OPEN.len()..header_end].trim();
        if path.is_empty() {
            cursor = header_end + 1;
            continue;
        }

        let Some((body_end, block_end)) = find_close(content, header_end + 1) else {
            // Unterminated fence: the rest of the text belongs to this
            // malformed block, so scanning stops here.
            break;
        };

        blocks.push(ArtifactBlock {
            path: path.to_string(),
            body: content[header_end + 1..body_end].to_string(),
            span: (open, block_end),
        });
        cursor = block_end;
    }

    blocks
}

/// Find the closing fence line at or after `from`. Returns the byte
/// offsets of the line's start (end of the body) and end.
fn find_close(content: &str, mut from: usize) -> Option<(usize, usize)> {
    while from <= content.len() {
        let line_end = content[from..]
            .find('\n')
            .map(|i| from + i)
            .unwrap_or(content.len());
        if content[from..line_end].trim_end_matches('\r') == FENCE_CLOSE {
            return Some((from, line_end));
        }
        if line_end == content.len() {
            return None;
        }
        from = line_end + 1;
    }
    None
}
