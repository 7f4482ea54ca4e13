use crate::ast::CodeCategory;
use crate::parsing::combinator::text::{any_not, literal};
use crate::parsing::inline::TextDelimiter;

use super::{CodeSpanParser, token};

/// A comment from `start` to the end of the line, newline included.
pub fn single_line_comment(start: &str) -> CodeSpanParser {
    let parser = literal(start)
        .then(any_not('\n'))
        .then(literal("\n").into_parser().opt());
    token(parser, CodeCategory::Comment)
}

/// A comment between `start` and `end`; an unterminated one runs to the
/// end of the code.
pub fn multi_line_comment(start: &str, end: &str) -> CodeSpanParser {
    let body = TextDelimiter::delimited_by(end).accept_eof().into_parser();
    token(literal(start).then(body), CodeCategory::Comment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::CodeSpan;
    use crate::parsing::combinator::SourceCursor;

    #[test]
    fn single_line_stops_after_newline() {
        let (spans, next) = single_line_comment("#")
            .parse(&SourceCursor::new("# note\nx"))
            .unwrap();
        assert_eq!(spans, vec![CodeSpan::new("# note\n", CodeCategory::Comment)]);
        assert_eq!(next.remaining(), "x");
    }

    #[test]
    fn multi_line_includes_delimiters() {
        let (spans, next) = multi_line_comment("/*", "*/")
            .parse(&SourceCursor::new("/* a\nb */c"))
            .unwrap();
        assert_eq!(spans, vec![CodeSpan::new("/* a\nb */", CodeCategory::Comment)]);
        assert_eq!(next.remaining(), "c");
    }
}
