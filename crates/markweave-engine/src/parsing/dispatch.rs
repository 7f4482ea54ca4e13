//! Char-indexed dispatch tables built from parser definitions.

use std::sync::Arc;

use crate::ast::{Block, Span};
use crate::parsing::combinator::{Failure, Parser, PrefixedParser, SourceCursor, failure, first_of};
use crate::parsing::definition::{
    BlockParserDefinition, BlockPosition, ParserDefinition, Precedence, SpanParserDefinition,
};
use crate::parsing::inline::NestedTable;

pub const NO_BLOCK_PARSER: &str = "No decorated or undecorated block parser available";
pub const NO_UNDECORATED_BLOCK_PARSER: &str = "No undecorated block parser available";

/// Orders definitions as extension-High, main-High, main-Low, extension-Low.
///
/// Registration order is kept within each group.
pub fn merge_order<D: ParserDefinition>(main: Vec<D>, extensions: Vec<D>) -> Vec<D> {
    let (main_high, main_low): (Vec<D>, Vec<D>) = main
        .into_iter()
        .partition(|d| d.precedence() == Precedence::High);
    let (ext_high, ext_low): (Vec<D>, Vec<D>) = extensions
        .into_iter()
        .partition(|d| d.precedence() == Precedence::High);
    ext_high
        .into_iter()
        .chain(main_high)
        .chain(main_low)
        .chain(ext_low)
        .collect()
}

/// Builds a block parser dispatching on the first char of the input.
///
/// Definitions sharing a start char form one alternation in the given
/// order. When a char has a bucket but no parser in it succeeds, the
/// unprefixed alternation is tried at the same position.
pub fn create_dispatch(parsers: Vec<PrefixedParser<Block>>) -> Parser<Block> {
    let (prefixed, unprefixed): (Vec<_>, Vec<_>) =
        parsers.into_iter().partition(|p| !p.is_unprefixed());
    let table = NestedTable::new(prefixed);
    let unprefixed = match unprefixed.len() {
        0 => None,
        _ => Some(first_of(unprefixed.into_iter().map(PrefixedParser::into_parser).collect())),
    };
    if table.is_empty() && unprefixed.is_none() {
        return failure(NO_BLOCK_PARSER);
    }
    Parser::new(move |cursor: &SourceCursor| {
        if let Some(bucket) = cursor.char().and_then(|c| table.get(c)) {
            match bucket.parse(cursor) {
                Ok(result) => return Ok(result),
                Err(miss) => {
                    log::trace!("no decorated block at {}: {}", cursor.position(), miss);
                    if unprefixed.is_none() {
                        return Err(miss);
                    }
                }
            }
        }
        match &unprefixed {
            Some(parser) => parser.parse(cursor),
            None => Err(Failure::new(NO_UNDECORATED_BLOCK_PARSER, cursor)),
        }
    })
}

/// The three block dispatch parsers of a grammar.
pub struct BlockTables {
    pub root: Parser<Block>,
    pub nested: Parser<Block>,
    pub fallback: Parser<Block>,
}

pub fn assemble_blocks(definitions: &[BlockParserDefinition]) -> BlockTables {
    let select = |keep: &dyn Fn(&BlockParserDefinition) -> bool| {
        create_dispatch(
            definitions
                .iter()
                .filter(|d| keep(*d))
                .map(|d| PrefixedParser::new(d.start_chars.clone(), d.parser.clone()))
                .collect(),
        )
    };
    BlockTables {
        root: select(&|d| d.position != BlockPosition::NestedOnly),
        nested: select(&|d| d.position != BlockPosition::RootOnly),
        fallback: select(&|d| d.position != BlockPosition::RootOnly && !d.is_recursive),
    }
}

/// The nested-span tables of a grammar: the full one and the one used past
/// the nesting cap.
pub struct SpanTables {
    pub full: Arc<NestedTable<Span>>,
    pub fallback: Arc<NestedTable<Span>>,
}

pub fn assemble_spans(definitions: Vec<SpanParserDefinition>) -> SpanTables {
    let definitions: Vec<_> = definitions
        .into_iter()
        .filter(|d| {
            if d.start_chars.is_empty() {
                log::warn!("dropping span parser without start chars");
            }
            !d.start_chars.is_empty()
        })
        .collect();
    let table = |keep: &dyn Fn(&SpanParserDefinition) -> bool| {
        Arc::new(NestedTable::new(
            definitions
                .iter()
                .filter(|d| keep(*d))
                .map(|d| PrefixedParser::new(d.start_chars.clone(), d.parser.clone())),
        ))
    };
    SpanTables {
        full: table(&|_| true),
        fallback: table(&|d| !d.is_recursive),
    }
}
