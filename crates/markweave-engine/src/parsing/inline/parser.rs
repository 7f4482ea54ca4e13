use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::ast::CodeCategory;
use crate::parsing::combinator::{
    Attempt, Failure, ParseResult, Parser, PrefixedParser, SourceCursor,
};
use crate::parsing::nesting::is_capped;

use super::builder::{CodeSpanBuilder, ResultBuilder, SpanBuilder, TextBuilder};
use super::delimiter::{TextDelimiter, scan};
use super::inline_delimiter::{InlineDelimiter, InlineResult};
use super::table::NestedTable;

/// Resolves a nested-span table at parse time. The flag asks for the
/// fallback table used past the nesting cap.
pub type DeferredTable<E> = Arc<dyn Fn(bool) -> Option<Arc<NestedTable<E>>> + Send + Sync>;

/// Parses inline content with nested spans in a single pass.
///
/// The scan stops only at the end delimiter's chars and at the start chars
/// of embedded parsers. At a nested start char the mapped parser runs; if it
/// fails, or succeeds without consuming anything, the char is kept as plain
/// text and scanning resumes right after it. A nested attempt that failed
/// once at a position is not repeated there by an enclosing scan.
pub struct InlineParser<B: ResultBuilder> {
    end: TextDelimiter,
    builder: Arc<dyn Fn() -> B + Send + Sync>,
    embedded: Vec<PrefixedParser<B::Element>>,
    deferred: Option<DeferredTable<B::Element>>,
}

impl<B: ResultBuilder> InlineParser<B> {
    pub fn new<F>(end: TextDelimiter, builder: F) -> Self
    where
        F: Fn() -> B + Send + Sync + 'static,
    {
        Self {
            end,
            builder: Arc::new(builder),
            embedded: Vec::new(),
            deferred: None,
        }
    }

    pub fn embed(mut self, parser: PrefixedParser<B::Element>) -> Self {
        if parser.is_unprefixed() {
            log::warn!("ignoring nested span parser without start chars");
        } else {
            self.embedded.push(parser);
        }
        self
    }

    pub fn embed_all(self, parsers: impl IntoIterator<Item = PrefixedParser<B::Element>>) -> Self {
        parsers.into_iter().fold(self, InlineParser::embed)
    }

    /// Embeds a table that only exists once the grammar is assembled.
    ///
    /// Parsers embedded directly are tried before the deferred table.
    pub fn embed_deferred(mut self, table: DeferredTable<B::Element>) -> Self {
        self.deferred = Some(table);
        self
    }

    pub fn into_parser(self) -> Parser<B::Output> {
        static NEXT_SCANNER: AtomicUsize = AtomicUsize::new(0);
        let scanner = Scanner {
            id: NEXT_SCANNER.fetch_add(1, Ordering::Relaxed),
            non_empty: self.end.is_non_empty(),
            end: self.end.allowing_empty(),
            builder: self.builder,
            table: NestedTable::new(self.embedded),
            deferred: self.deferred,
        };
        Parser::new(move |cursor| scanner.parse(cursor))
    }
}

struct Scanner<B: ResultBuilder> {
    id: usize,
    end: TextDelimiter,
    non_empty: bool,
    builder: Arc<dyn Fn() -> B + Send + Sync>,
    table: NestedTable<B::Element>,
    deferred: Option<DeferredTable<B::Element>>,
}

impl<B: ResultBuilder> Scanner<B> {
    fn parse(&self, cursor: &SourceCursor) -> ParseResult<B::Output> {
        let level = cursor.nest_level();
        let child_level = level + 1;
        let deferred = self
            .deferred
            .as_ref()
            .and_then(|resolve| resolve(is_capped(child_level)));
        let nested_chars = match &deferred {
            Some(table) => self.table.start_chars().union(table.start_chars()),
            None => self.table.start_chars().clone(),
        };
        let delimiter = InlineDelimiter::new(&self.end, nested_chars);

        let mut builder = (self.builder)();
        let mut has_content = false;
        let mut position = cursor.clone();
        loop {
            let (found, next) = scan(&delimiter, &position)?;
            match found {
                InlineResult::EndDelimiter(text) => {
                    has_content |= !text.is_empty();
                    if self.non_empty && !has_content {
                        return Err(Failure::new("expected non-empty text", cursor));
                    }
                    builder.add_text(&text);
                    return Ok((builder.result(), next.with_nest_level(level)));
                }
                InlineResult::NestedDelimiter { start_char, text } => {
                    builder.add_text(&text);
                    let at = next.with_nest_level(child_level);
                    match self.parse_nested(start_char, &at, deferred.as_deref()) {
                        Some((element, after)) => {
                            builder.add_element(element);
                            position = after.with_nest_level(level);
                        }
                        None => {
                            let mut literal = [0u8; 4];
                            builder.add_text(start_char.encode_utf8(&mut literal));
                            position = next.consume_char();
                        }
                    }
                    has_content = true;
                }
            }
        }
    }

    /// Runs the parsers registered for `c`; only a result that consumed
    /// input counts as a match.
    fn parse_nested(
        &self,
        c: char,
        at: &SourceCursor,
        deferred: Option<&NestedTable<B::Element>>,
    ) -> Option<(B::Element, SourceCursor)> {
        let attempt = Attempt {
            scanner: self.id,
            start_char: c,
        };
        if at.has_failed(attempt) {
            return None;
        }
        let candidates = self
            .table
            .get(c)
            .into_iter()
            .chain(deferred.and_then(|table| table.get(c)));
        for parser in candidates {
            match parser.parse(at) {
                Ok((element, after)) if after.offset() > at.offset() => {
                    return Some((element, after));
                }
                Ok(_) => {}
                Err(failure) => log::trace!("nested parser at '{c}' failed: {failure}"),
            }
        }
        at.record_failure(attempt);
        None
    }
}

/// Inline text where nested parsers contribute plain strings, e.g. escapes.
pub fn text(end: TextDelimiter) -> InlineParser<TextBuilder> {
    InlineParser::new(end, TextBuilder::default)
}

/// Inline markup producing a span list.
pub fn spans(end: TextDelimiter) -> InlineParser<SpanBuilder> {
    InlineParser::new(end, SpanBuilder::default)
}

/// Highlighted code; unmatched text gets `category`.
pub fn code_spans(
    end: TextDelimiter,
    category: Option<CodeCategory>,
) -> InlineParser<CodeSpanBuilder> {
    InlineParser::new(end, move || CodeSpanBuilder::new(category))
}
