//! The grammar's recursive entry points, as seen by parser factories.
//!
//! Factories receive a [`GrammarHandle`] while the grammar is still being
//! assembled. Every parser obtained from it resolves the grammar only when
//! it runs, through a weak reference, so no factory can force the grammar
//! into existence early and no parser keeps its own grammar alive.

use std::sync::{Arc, Weak};

use crate::ast::{Block, Invalid, Span};
use crate::highlight::SyntaxHighlighter;
use crate::parsing::combinator::{Failure, Parser, PrefixedParser, SourceCursor};
use crate::parsing::inline::{self, DeferredTable, TextDelimiter};
use crate::parsing::root::Grammar;

/// Access to the host format's escape sequences.
pub trait EscapedTextParsers {
    /// The escape sequence parser, producing the escaped text.
    fn escape_sequence(&self) -> PrefixedParser<String>;

    /// Text up to `delimiter` with escape sequences resolved.
    fn escaped_text(&self, delimiter: TextDelimiter) -> Parser<String>;
}

/// Access to recursive span parsing.
pub trait RecursiveSpanParsers: EscapedTextParsers {
    /// Spans up to `delimiter`, recognizing every registered span parser in
    /// the same scan.
    fn recursive_spans(&self, delimiter: TextDelimiter) -> Parser<Vec<Span>>;

    /// Captures text with `source`, then parses the capture as spans.
    fn recursive_spans_of(&self, source: Parser<String>) -> Parser<Vec<Span>>;
}

/// Access to recursive block parsing.
pub trait RecursiveParsers: RecursiveSpanParsers {
    /// Captures text with `source`, then parses the capture as nested
    /// blocks one level deeper. A failed re-parse yields a single invalid
    /// block holding the captured text.
    fn recursive_blocks(&self, source: Parser<String>) -> Parser<Vec<Block>>;

    /// Parse-time lookup of registered syntax highlighters.
    fn highlighters(&self) -> Highlighters;
}

/// The handle given to parser factories during assembly.
#[derive(Clone)]
pub struct GrammarHandle {
    grammar: Weak<Grammar>,
    escape: PrefixedParser<String>,
}

impl GrammarHandle {
    pub(crate) fn new(grammar: Weak<Grammar>, escape: PrefixedParser<String>) -> Self {
        Self { grammar, escape }
    }

    fn span_tables(&self) -> DeferredTable<Span> {
        let grammar = self.grammar.clone();
        Arc::new(move |fallback: bool| grammar.upgrade().map(|g| g.span_table(fallback)))
    }
}

fn resolve(grammar: &Weak<Grammar>, cursor: &SourceCursor) -> Result<Arc<Grammar>, Failure> {
    grammar
        .upgrade()
        .ok_or_else(|| Failure::new("grammar is not assembled", cursor))
}

impl EscapedTextParsers for GrammarHandle {
    fn escape_sequence(&self) -> PrefixedParser<String> {
        self.escape.clone()
    }

    fn escaped_text(&self, delimiter: TextDelimiter) -> Parser<String> {
        inline::text(delimiter).embed(self.escape.clone()).into_parser()
    }
}

impl RecursiveSpanParsers for GrammarHandle {
    fn recursive_spans(&self, delimiter: TextDelimiter) -> Parser<Vec<Span>> {
        inline::spans(delimiter)
            .embed_deferred(self.span_tables())
            .into_parser()
    }

    fn recursive_spans_of(&self, source: Parser<String>) -> Parser<Vec<Span>> {
        let spans = self.recursive_spans(TextDelimiter::until_eof());
        Parser::new(move |cursor: &SourceCursor| {
            let (captured, next) = source.parse(cursor)?;
            let inner = SourceCursor::nested(captured.as_str(), cursor.nest_level());
            let result = match spans.parse(&inner) {
                Ok((spans, _)) => spans,
                Err(failure) => {
                    log::warn!("invalid span content at {}: {}", cursor.position(), failure);
                    vec![Span::Invalid(Invalid::error(failure.message(), captured))]
                }
            };
            Ok((result, next))
        })
    }
}

impl RecursiveParsers for GrammarHandle {
    fn recursive_blocks(&self, source: Parser<String>) -> Parser<Vec<Block>> {
        let grammar = self.grammar.clone();
        Parser::new(move |cursor: &SourceCursor| {
            let (captured, next) = source.parse(cursor)?;
            let grammar = resolve(&grammar, cursor)?;
            let blocks = match grammar.nested_blocks(&captured, cursor.nest_level() + 1) {
                Ok(blocks) => blocks,
                Err(failure) => {
                    log::warn!("invalid block content at {}: {}", cursor.position(), failure);
                    vec![Block::Invalid(Invalid::error(failure.message(), captured))]
                }
            };
            Ok((blocks, next))
        })
    }

    fn highlighters(&self) -> Highlighters {
        Highlighters {
            grammar: self.grammar.clone(),
        }
    }
}

/// Looks up syntax highlighters by name once the grammar exists.
#[derive(Clone)]
pub struct Highlighters {
    grammar: Weak<Grammar>,
}

impl Highlighters {
    /// Case-insensitive lookup.
    pub fn get(&self, language: &str) -> Option<Arc<SyntaxHighlighter>> {
        self.grammar.upgrade()?.highlighter(language)
    }
}
