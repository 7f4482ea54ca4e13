//! Deferred parser construction.
//!
//! A builder holds a factory that receives the grammar's recursive entry
//! points. Factories run exactly once per grammar assembly; the entry points
//! they receive only resolve the assembled grammar when input is parsed.

use std::fmt;
use std::sync::Arc;

use crate::ast::{Block, Span};
use crate::parsing::combinator::PrefixedParser;
use crate::parsing::definition::{
    BlockParserDefinition, BlockPosition, Precedence, SpanParserDefinition,
};
use crate::parsing::recursive::{
    EscapedTextParsers, GrammarHandle, RecursiveParsers, RecursiveSpanParsers,
};

type Factory<T> = Arc<dyn Fn(&GrammarHandle) -> PrefixedParser<T> + Send + Sync>;

#[derive(Clone)]
pub struct BlockParserBuilder {
    factory: Factory<Block>,
    is_recursive: bool,
    precedence: Precedence,
    position: BlockPosition,
}

impl BlockParserBuilder {
    fn from_factory(factory: Factory<Block>, is_recursive: bool) -> Self {
        Self {
            factory,
            is_recursive,
            precedence: Precedence::High,
            position: BlockPosition::Any,
        }
    }

    /// A parser that never re-enters the grammar.
    pub fn standalone(parser: impl Into<PrefixedParser<Block>>) -> Self {
        let parser = parser.into();
        Self::from_factory(Arc::new(move |_: &GrammarHandle| parser.clone()), false)
    }

    /// A parser that only needs the host format's escape sequences.
    pub fn with_escaped_text<F>(factory: F) -> Self
    where
        F: Fn(&dyn EscapedTextParsers) -> PrefixedParser<Block> + Send + Sync + 'static,
    {
        Self::from_factory(Arc::new(move |handle: &GrammarHandle| factory(handle)), false)
    }

    /// A parser with inline content, e.g. a paragraph or header.
    pub fn with_spans<F>(factory: F) -> Self
    where
        F: Fn(&dyn RecursiveSpanParsers) -> PrefixedParser<Block> + Send + Sync + 'static,
    {
        Self::from_factory(Arc::new(move |handle: &GrammarHandle| factory(handle)), false)
    }

    /// A parser with nested block content. Excluded past the nesting cap.
    pub fn recursive<F>(factory: F) -> Self
    where
        F: Fn(&dyn RecursiveParsers) -> PrefixedParser<Block> + Send + Sync + 'static,
    {
        Self::from_factory(Arc::new(move |handle: &GrammarHandle| factory(handle)), true)
    }

    pub fn root_only(mut self) -> Self {
        self.position = BlockPosition::RootOnly;
        self
    }

    pub fn nested_only(mut self) -> Self {
        self.position = BlockPosition::NestedOnly;
        self
    }

    pub fn with_low_precedence(mut self) -> Self {
        self.precedence = Precedence::Low;
        self
    }

    pub fn create_parser(&self, handle: &GrammarHandle) -> BlockParserDefinition {
        let parser = (self.factory)(handle);
        BlockParserDefinition {
            start_chars: parser.start_chars().clone(),
            parser: parser.into_parser(),
            is_recursive: self.is_recursive,
            precedence: self.precedence,
            position: self.position,
        }
    }
}

impl fmt::Debug for BlockParserBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockParserBuilder")
            .field("is_recursive", &self.is_recursive)
            .field("precedence", &self.precedence)
            .field("position", &self.position)
            .finish_non_exhaustive()
    }
}

#[derive(Clone)]
pub struct SpanParserBuilder {
    factory: Factory<Span>,
    is_recursive: bool,
    precedence: Precedence,
}

impl SpanParserBuilder {
    fn from_factory(factory: Factory<Span>, is_recursive: bool) -> Self {
        Self {
            factory,
            is_recursive,
            precedence: Precedence::High,
        }
    }

    pub fn standalone(parser: PrefixedParser<Span>) -> Self {
        Self::from_factory(Arc::new(move |_: &GrammarHandle| parser.clone()), false)
    }

    pub fn with_escaped_text<F>(factory: F) -> Self
    where
        F: Fn(&dyn EscapedTextParsers) -> PrefixedParser<Span> + Send + Sync + 'static,
    {
        Self::from_factory(Arc::new(move |handle: &GrammarHandle| factory(handle)), false)
    }

    /// A span with nested spans, e.g. emphasis. Excluded past the nesting cap.
    pub fn recursive<F>(factory: F) -> Self
    where
        F: Fn(&dyn RecursiveSpanParsers) -> PrefixedParser<Span> + Send + Sync + 'static,
    {
        Self::from_factory(Arc::new(move |handle: &GrammarHandle| factory(handle)), true)
    }

    pub fn with_low_precedence(mut self) -> Self {
        self.precedence = Precedence::Low;
        self
    }

    pub fn create_parser(&self, handle: &GrammarHandle) -> SpanParserDefinition {
        let parser = (self.factory)(handle);
        SpanParserDefinition {
            start_chars: parser.start_chars().clone(),
            parser: parser.into_parser(),
            is_recursive: self.is_recursive,
            precedence: self.precedence,
        }
    }
}

impl fmt::Debug for SpanParserBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpanParserBuilder")
            .field("is_recursive", &self.is_recursive)
            .field("precedence", &self.precedence)
            .finish_non_exhaustive()
    }
}
