//! Extraction of sandbox file mutations embedded in assistant replies.

pub mod extractor;
pub mod parser;

pub use extractor::{process_artifacts, process_response};
pub use parser::{parse_blocks, ArtifactBlock};
