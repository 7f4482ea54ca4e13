use crate::ast::Span;
use crate::parsing::combinator::PrefixedParser;
use crate::parsing::combinator::text::{literal, one_if};
use crate::parsing::inline::TextDelimiter;
use crate::parsing::{RecursiveSpanParsers, SpanParserBuilder};

/// `*emphasis*`, `_emphasis_`, `**strong**` and `__strong__`.
pub struct Emphasis;

impl Emphasis {
    pub const MARKERS: [char; 2] = ['*', '_'];
    const WHITESPACE: [char; 3] = [' ', '\t', '\n'];

    /// Content between two `marker`s. The opening marker must not be
    /// followed by whitespace, the closing one not preceded by it.
    fn delimited(spans: &dyn RecursiveSpanParsers, marker: &str) -> PrefixedParser<Vec<Span>> {
        let not_whitespace = one_if(|c| !c.is_whitespace()).lookahead();
        let content = spans.recursive_spans(
            TextDelimiter::delimited_by(marker)
                .non_empty()
                .prev_not(Self::WHITESPACE),
        );
        literal(marker).then_skip(not_whitespace).skip_then(content)
    }

    pub fn strong() -> SpanParserBuilder {
        SpanParserBuilder::recursive(|spans| {
            Self::delimited(spans, "**")
                .or(Self::delimited(spans, "__"))
                .map(Span::Strong)
        })
    }

    pub fn emphasized() -> SpanParserBuilder {
        SpanParserBuilder::recursive(|spans| {
            Self::delimited(spans, "*")
                .or(Self::delimited(spans, "_"))
                .map(Span::Emphasized)
        })
    }
}
