use std::sync::Arc;

use crate::ast::Block;
use crate::parsing::builders::{BlockParserBuilder, SpanParserBuilder};
use crate::parsing::combinator::text::literal;
use crate::parsing::combinator::{Parser, PrefixedParser};

/// Rewrites every parsed block list, root and nested alike.
pub type BlockPostProcessor = Arc<dyn Fn(Vec<Block>) -> Vec<Block> + Send + Sync>;

/// A host markup grammar.
pub trait MarkupFormat: Send + Sync {
    fn name(&self) -> &str;

    fn file_suffixes(&self) -> &[&str];

    /// Block parsers in registration order.
    fn block_parsers(&self) -> Vec<BlockParserBuilder>;

    /// Span parsers in registration order.
    fn span_parsers(&self) -> Vec<SpanParserBuilder>;

    /// The char following a backslash in an escape sequence.
    fn escaped_char(&self) -> Parser<char>;

    fn post_processor(&self) -> BlockPostProcessor {
        Arc::new(|blocks| blocks)
    }
}

/// A backslash followed by an escaped char, producing the char.
pub fn escape_sequence(escaped_char: Parser<char>) -> PrefixedParser<String> {
    literal("\\")
        .skip_then(escaped_char)
        .map(|c| c.to_string())
}
