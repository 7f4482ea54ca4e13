use crate::ast::{Block, Span};
use crate::parsing::combinator::{CharSet, Parser};

/// Try-order tier among parsers sharing a start char.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Precedence {
    High,
    Low,
}

/// Where a block parser may be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockPosition {
    Any,
    RootOnly,
    NestedOnly,
}

/// Metadata shared by block and span parser definitions.
pub trait ParserDefinition {
    type Element;

    /// Empty for parsers without a static start char.
    fn start_chars(&self) -> &CharSet;
    fn parser(&self) -> &Parser<Self::Element>;
    fn is_recursive(&self) -> bool;
    fn precedence(&self) -> Precedence;
}

#[derive(Debug, Clone)]
pub struct BlockParserDefinition {
    pub start_chars: CharSet,
    pub parser: Parser<Block>,
    pub is_recursive: bool,
    pub precedence: Precedence,
    pub position: BlockPosition,
}

#[derive(Debug, Clone)]
pub struct SpanParserDefinition {
    pub start_chars: CharSet,
    pub parser: Parser<Span>,
    pub is_recursive: bool,
    pub precedence: Precedence,
}

impl ParserDefinition for BlockParserDefinition {
    type Element = Block;

    fn start_chars(&self) -> &CharSet {
        &self.start_chars
    }

    fn parser(&self) -> &Parser<Block> {
        &self.parser
    }

    fn is_recursive(&self) -> bool {
        self.is_recursive
    }

    fn precedence(&self) -> Precedence {
        self.precedence
    }
}

impl ParserDefinition for SpanParserDefinition {
    type Element = Span;

    fn start_chars(&self) -> &CharSet {
        &self.start_chars
    }

    fn parser(&self) -> &Parser<Span> {
        &self.parser
    }

    fn is_recursive(&self) -> bool {
        self.is_recursive
    }

    fn precedence(&self) -> Precedence {
        self.precedence
    }
}
