use crate::ast::Span;
use crate::parsing::SpanParserBuilder;
use crate::parsing::combinator::text::literal;
use crate::parsing::inline::TextDelimiter;

/// `[text](target)`
pub struct Link;

impl Link {
    pub const OPEN: char = '[';

    pub fn builder() -> SpanParserBuilder {
        SpanParserBuilder::recursive(|spans| {
            let content = spans.recursive_spans(TextDelimiter::delimited_by("]"));
            let target = spans.escaped_text(
                TextDelimiter::delimited_by(")")
                    .fail_on([' ', '\n'])
                    .non_empty(),
            );
            literal("[")
                .skip_then(content)
                .then_skip(literal("(").into_parser())
                .then(target)
                .map(|(content, target)| Span::Link { content, target })
        })
    }
}
