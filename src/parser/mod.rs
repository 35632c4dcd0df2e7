//! Parser module — block extraction followed by tag parsing.

pub mod extract;
pub mod tags;

use crate::model::Document;
use crate::report::Reporter;
use thiserror::Error;
use tracing::debug;

/// Recoverable failure for a single block. The block is skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// `block` holds the decoration-stripped text, for diagnosis.
    #[error("Missing tag name in \"{block}\"")]
    MissingNameTag { block: String },
}

/// Parse every documentation block in `input` into a Document.
///
/// Blocks that fail to parse are handed to `reporter` and left out.
pub fn parse_document(input: &str, reporter: &mut dyn Reporter) -> Document {
    let mut doc = Document::default();

    for block in extract::comment_blocks(input) {
        match tags::parse_comment(block) {
            Ok(element) => {
                debug!(name = %element.name, kind = ?element.kind, "parsed element");
                doc.elements.push(element);
            }
            Err(e) => reporter.warn(&e),
        }
    }

    doc
}
