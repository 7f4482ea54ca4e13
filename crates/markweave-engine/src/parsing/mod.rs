//! The extensible parsing engine.
//!
//! A [`MarkupFormat`] and any number of [`ExtensionBundle`]s contribute
//! parser builders. [`RootParser`] runs every builder once, merges the
//! resulting definitions by precedence into char-indexed dispatch tables
//! and exposes the entry points for whole documents and nested content.

mod builders;
mod bundle;
pub mod combinator;
mod definition;
mod dispatch;
mod error;
mod format;
pub mod inline;
mod invalid;
mod nesting;
mod recursive;
mod root;

pub use builders::{BlockParserBuilder, SpanParserBuilder};
pub use bundle::ExtensionBundle;
pub use definition::{
    BlockParserDefinition, BlockPosition, ParserDefinition, Precedence, SpanParserDefinition,
};
pub use dispatch::{
    BlockTables, NO_BLOCK_PARSER, NO_UNDECORATED_BLOCK_PARSER, SpanTables, assemble_blocks,
    assemble_spans, create_dispatch, merge_order,
};
pub use error::ParseError;
pub use format::{BlockPostProcessor, MarkupFormat, escape_sequence};
pub use invalid::committed;
pub use nesting::{MAX_NEST_LEVEL, block_list, is_capped};
pub use recursive::{
    EscapedTextParsers, GrammarHandle, Highlighters, RecursiveParsers, RecursiveSpanParsers,
};
pub use root::RootParser;
