use crate::ast::Span;
use crate::parsing::SpanParserBuilder;
use crate::parsing::combinator::PrefixedParser;
use crate::parsing::combinator::text::literal;
use crate::parsing::inline::TextDelimiter;

/// Inline code between single or double backticks; no markup inside.
pub struct InlineCode;

impl InlineCode {
    pub const DELIMITER: char = '`';

    fn between(delimiter: &str) -> PrefixedParser<String> {
        literal(delimiter).skip_then(TextDelimiter::delimited_by(delimiter).non_empty().into_parser())
    }

    pub fn builder() -> SpanParserBuilder {
        let parser = Self::between("``")
            .or(Self::between("`"))
            .map(|code| Span::Literal(code.trim().to_string()));
        SpanParserBuilder::standalone(parser)
    }
}
