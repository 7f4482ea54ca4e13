use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use crate::ast::{Block, CodeSpan, RootElement, Span};
use crate::highlight::SyntaxHighlighter;
use crate::parsing::bundle::ExtensionBundle;
use crate::parsing::combinator::{Failure, Parser, PrefixedParser, SourceCursor};
use crate::parsing::definition::{Precedence, SpanParserDefinition};
use crate::parsing::dispatch::{SpanTables, assemble_blocks, assemble_spans, merge_order};
use crate::parsing::error::ParseError;
use crate::parsing::format::{BlockPostProcessor, MarkupFormat, escape_sequence};
use crate::parsing::inline::{NestedTable, TextDelimiter};
use crate::parsing::nesting::{block_list, is_capped};
use crate::parsing::recursive::{GrammarHandle, RecursiveParsers, RecursiveSpanParsers};

/// An assembled grammar: dispatch tables plus registered highlighters.
///
/// Read-only once built; all per-parse state lives in cursors.
pub(crate) struct Grammar {
    format_name: String,
    escape: PrefixedParser<String>,
    root_blocks: Parser<Vec<Block>>,
    nested_blocks: Parser<Vec<Block>>,
    fallback_blocks: Parser<Vec<Block>>,
    spans: SpanTables,
    highlighters: HashMap<String, Arc<SyntaxHighlighter>>,
}

impl Grammar {
    fn assemble(
        format: &dyn MarkupFormat,
        bundles: &[Box<dyn ExtensionBundle>],
        handle: &GrammarHandle,
        escape: PrefixedParser<String>,
    ) -> Self {
        let main_blocks: Vec<_> = format
            .block_parsers()
            .iter()
            .map(|b| b.create_parser(handle))
            .collect();
        let extension_blocks: Vec<_> = bundles
            .iter()
            .flat_map(|bundle| bundle.block_parsers())
            .map(|b| b.create_parser(handle))
            .collect();
        let blocks = assemble_blocks(&merge_order(main_blocks, extension_blocks));

        let mut main_spans = vec![SpanParserDefinition {
            start_chars: escape.start_chars().clone(),
            parser: escape.parser().clone().map(Span::Text),
            is_recursive: false,
            precedence: Precedence::High,
        }];
        main_spans.extend(format.span_parsers().iter().map(|b| b.create_parser(handle)));
        let extension_spans: Vec<_> = bundles
            .iter()
            .flat_map(|bundle| bundle.span_parsers())
            .map(|b| b.create_parser(handle))
            .collect();
        let spans = assemble_spans(merge_order(main_spans, extension_spans));

        let post_processor = format.post_processor();
        let list = |block: Parser<Block>| post_processed(block_list(block), &post_processor);

        Self {
            format_name: format.name().to_string(),
            escape,
            root_blocks: list(blocks.root),
            nested_blocks: list(blocks.nested),
            fallback_blocks: list(blocks.fallback),
            spans,
            highlighters: collect_highlighters(bundles),
        }
    }

    pub(crate) fn span_table(&self, fallback: bool) -> Arc<NestedTable<Span>> {
        if fallback {
            Arc::clone(&self.spans.fallback)
        } else {
            Arc::clone(&self.spans.full)
        }
    }

    pub(crate) fn highlighter(&self, language: &str) -> Option<Arc<SyntaxHighlighter>> {
        self.highlighters.get(&language.to_lowercase()).cloned()
    }

    /// Parses `input` as the block content of a container at `level`.
    pub(crate) fn nested_blocks(&self, input: &str, level: usize) -> Result<Vec<Block>, Failure> {
        let blocks = if is_capped(level) {
            log::debug!("nesting level {level} reached, parsing with non-recursive block parsers");
            &self.fallback_blocks
        } else {
            &self.nested_blocks
        };
        blocks
            .parse(&SourceCursor::nested(input, level))
            .map(|(blocks, _)| blocks)
    }
}

fn post_processed(list: Parser<Vec<Block>>, post_processor: &BlockPostProcessor) -> Parser<Vec<Block>> {
    let post_processor = Arc::clone(post_processor);
    list.map(move |blocks| post_processor(blocks))
}

/// First registration of a name wins.
fn collect_highlighters(
    bundles: &[Box<dyn ExtensionBundle>],
) -> HashMap<String, Arc<SyntaxHighlighter>> {
    let mut highlighters = HashMap::new();
    for highlighter in bundles.iter().flat_map(|b| b.syntax_highlighters()) {
        let highlighter = Arc::new(highlighter);
        for name in highlighter.names() {
            match highlighters.entry(name.to_lowercase()) {
                Entry::Vacant(entry) => {
                    entry.insert(Arc::clone(&highlighter));
                }
                Entry::Occupied(_) => {
                    log::debug!("ignoring duplicate syntax highlighter '{name}'");
                }
            }
        }
    }
    highlighters
}

/// Parses documents of one host format extended by bundles.
///
/// Building a `RootParser` runs every parser factory once; afterwards the
/// parser is immutable and can be cloned and shared across threads.
#[derive(Clone)]
pub struct RootParser {
    grammar: Arc<Grammar>,
}

impl RootParser {
    pub fn new(format: &dyn MarkupFormat, bundles: &[Box<dyn ExtensionBundle>]) -> Self {
        let escape = escape_sequence(format.escaped_char());
        let grammar = Arc::new_cyclic(|weak| {
            let handle = GrammarHandle::new(weak.clone(), escape.clone());
            Grammar::assemble(format, bundles, &handle, escape)
        });
        log::debug!(
            "assembled {} grammar with {} extension bundle(s) and {} highlighter name(s)",
            grammar.format_name,
            bundles.len(),
            grammar.highlighters.len()
        );
        Self { grammar }
    }

    fn handle(&self) -> GrammarHandle {
        GrammarHandle::new(Arc::downgrade(&self.grammar), self.grammar.escape.clone())
    }

    pub fn format_name(&self) -> &str {
        &self.grammar.format_name
    }

    /// Registered highlighter names, sorted.
    pub fn highlighter_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.grammar.highlighters.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// The parser for a complete document.
    pub fn root_element(&self) -> Parser<RootElement> {
        self.grammar.root_blocks.clone().map(RootElement::new)
    }

    pub fn parse(&self, input: &str) -> Result<RootElement, ParseError> {
        let input = input.replace("\r\n", "\n");
        self.root_element()
            .parse(&SourceCursor::new(input.as_str()))
            .map(|(root, _)| root)
            .map_err(|failure| ParseError::from_failure(&failure, &input))
    }

    /// See [`RecursiveParsers::recursive_blocks`].
    pub fn recursive_blocks(&self, source: Parser<String>) -> Parser<Vec<Block>> {
        self.handle().recursive_blocks(source)
    }

    /// See [`RecursiveSpanParsers::recursive_spans`].
    pub fn recursive_spans(&self, delimiter: TextDelimiter) -> Parser<Vec<Span>> {
        self.handle().recursive_spans(delimiter)
    }

    /// See [`RecursiveSpanParsers::recursive_spans_of`].
    pub fn recursive_spans_of(&self, source: Parser<String>) -> Parser<Vec<Span>> {
        self.handle().recursive_spans_of(source)
    }

    /// Parses `input` as inline content only.
    pub fn parse_spans(&self, input: &str) -> Result<Vec<Span>, ParseError> {
        let input = input.replace("\r\n", "\n");
        self.recursive_spans(TextDelimiter::until_eof())
            .parse(&SourceCursor::new(input.as_str()))
            .map(|(spans, _)| spans)
            .map_err(|failure| ParseError::from_failure(&failure, &input))
    }

    pub fn highlight(&self, language: &str, code: &str) -> Result<Vec<CodeSpan>, ParseError> {
        let highlighter = self
            .grammar
            .highlighter(language)
            .ok_or_else(|| ParseError::UnknownLanguage(language.to_string()))?;
        highlighter
            .highlight(code)
            .map_err(|failure| ParseError::from_failure(&failure, code))
    }
}

impl std::fmt::Debug for RootParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RootParser")
            .field("format", &self.grammar.format_name)
            .field("highlighters", &self.highlighter_names())
            .finish_non_exhaustive()
    }
}
