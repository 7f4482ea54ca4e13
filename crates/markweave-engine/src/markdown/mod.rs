//! A Markdown-like host format.
//!
//! Covers the common block and span constructs; enough to host extensions
//! and exercise every part of the engine, not a complete dialect.

pub mod blocks;
pub mod spans;

use std::sync::Arc;

use crate::parsing::combinator::Parser;
use crate::parsing::combinator::text::one_if;
use crate::parsing::{BlockParserBuilder, BlockPostProcessor, MarkupFormat, SpanParserBuilder};

use blocks::{BlockQuote, BulletList, CodeFence, Header, LiteralBlock, Paragraph, ThematicBreak};
use spans::{Emphasis, InlineCode, Link};

#[derive(Debug, Default, Clone, Copy)]
pub struct Markdown;

impl MarkupFormat for Markdown {
    fn name(&self) -> &str {
        "Markdown"
    }

    fn file_suffixes(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn block_parsers(&self) -> Vec<BlockParserBuilder> {
        vec![
            Header::builder(),
            BlockQuote::builder(),
            CodeFence::builder(),
            ThematicBreak::builder(),
            BulletList::builder(),
            LiteralBlock::builder(),
            Paragraph::builder(),
        ]
    }

    fn span_parsers(&self) -> Vec<SpanParserBuilder> {
        vec![
            Emphasis::strong(),
            Emphasis::emphasized(),
            InlineCode::builder(),
            Link::builder(),
        ]
    }

    fn escaped_char(&self) -> Parser<char> {
        one_if(|c| c.is_ascii_punctuation())
    }

    fn post_processor(&self) -> BlockPostProcessor {
        Arc::new(blocks::merge_literal_blocks)
    }
}
