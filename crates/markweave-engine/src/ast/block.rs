use serde::Serialize;

use super::code::CodeSpan;
use super::message::Invalid;
use super::span::Span;

/// A structural document unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Block {
    Paragraph(Vec<Span>),
    Header {
        level: u8,
        content: Vec<Span>,
    },
    QuotedBlock(Vec<Block>),
    BulletList {
        marker: char,
        items: Vec<Vec<Block>>,
    },
    /// A fenced code block; highlighted when a highlighter for `language`
    /// is registered, otherwise a single uncategorized span.
    CodeBlock {
        language: Option<String>,
        content: Vec<CodeSpan>,
    },
    LiteralBlock(String),
    Rule,
    /// A named container produced by an extension.
    Container {
        kind: String,
        content: Vec<Block>,
    },
    Invalid(Invalid),
}

impl Block {
    /// Nested blocks, flattened across list items.
    pub fn child_blocks(&self) -> Vec<&Block> {
        match self {
            Block::QuotedBlock(content) | Block::Container { content, .. } => {
                content.iter().collect()
            }
            Block::BulletList { items, .. } => items.iter().flatten().collect(),
            _ => Vec::new(),
        }
    }

    /// Inline content held directly by this block.
    pub fn spans(&self) -> &[Span] {
        match self {
            Block::Paragraph(content) | Block::Header { content, .. } => content,
            _ => &[],
        }
    }
}
