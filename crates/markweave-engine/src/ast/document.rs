use serde::Serialize;

use super::block::Block;
use super::message::{Invalid, MessageLevel};
use super::span::Span;

/// The parsed document: the top-level block sequence.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct RootElement {
    pub content: Vec<Block>,
}

/// Returned by [`RootElement::check`] when the tree holds invalid elements
/// at or above the requested level.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("document contains {} invalid element(s) at level {level} or above", .invalid.len())]
pub struct InvalidDocument {
    pub level: MessageLevel,
    pub invalid: Vec<Invalid>,
}

impl RootElement {
    pub fn new(content: Vec<Block>) -> Self {
        Self { content }
    }

    /// All invalid placeholders in document order, blocks and spans alike.
    pub fn invalid_elements(&self) -> Vec<&Invalid> {
        let mut found = Vec::new();
        for block in &self.content {
            collect_block(block, &mut found);
        }
        found
    }

    pub fn check(&self, failure_level: MessageLevel) -> Result<(), InvalidDocument> {
        let invalid: Vec<Invalid> = self
            .invalid_elements()
            .into_iter()
            .filter(|i| i.message.level >= failure_level)
            .cloned()
            .collect();
        if invalid.is_empty() {
            Ok(())
        } else {
            Err(InvalidDocument {
                level: failure_level,
                invalid,
            })
        }
    }
}

fn collect_block<'a>(block: &'a Block, found: &mut Vec<&'a Invalid>) {
    if let Block::Invalid(invalid) = block {
        found.push(invalid);
    }
    for span in block.spans() {
        collect_span(span, found);
    }
    for child in block.child_blocks() {
        collect_block(child, found);
    }
}

fn collect_span<'a>(span: &'a Span, found: &mut Vec<&'a Invalid>) {
    if let Span::Invalid(invalid) = span {
        found.push(invalid);
    }
    for child in span.children() {
        collect_span(child, found);
    }
}
