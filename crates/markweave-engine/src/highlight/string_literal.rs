use crate::ast::{CodeCategory, CodeSpan};
use crate::parsing::combinator::text::{literal, one_if};
use crate::parsing::combinator::first_of;
use crate::parsing::inline::{self, TextDelimiter};

use super::{CodeSpanParser, enclose};

/// A string between two `delimiter` chars with embedded `escapes`.
/// Unless `multi_line`, a newline before the closing delimiter fails it.
pub fn string_literal(
    delimiter: char,
    escapes: Vec<CodeSpanParser>,
    multi_line: bool,
) -> CodeSpanParser {
    let mut end = TextDelimiter::delimited_by_chars(delimiter);
    if !multi_line {
        end = end.fail_on('\n');
    }
    let body = inline::code_spans(end, Some(CodeCategory::StringLiteral))
        .embed_all(escapes)
        .into_parser();
    let close = delimiter.to_string();
    literal(&close).then(body).map(move |(open, content)| {
        enclose(&open, content, &close, CodeCategory::StringLiteral)
    })
}

/// A single char or escape between single quotes.
pub fn char_literal(escapes: Vec<CodeSpanParser>) -> CodeSpanParser {
    let plain = one_if(|c| c != '\'' && c != '\\' && c != '\n')
        .map(|c| vec![CodeSpan::new(c.to_string(), CodeCategory::CharLiteral)]);
    let mut alternatives: Vec<_> = escapes.into_iter().map(|e| e.into_parser()).collect();
    alternatives.push(plain);
    literal("'")
        .then(first_of(alternatives))
        .then_skip(literal("'").into_parser())
        .map(|(open, content)| enclose(&open, content, "'", CodeCategory::CharLiteral))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::standard_escape;
    use crate::parsing::combinator::SourceCursor;
    use pretty_assertions::assert_eq;

    #[test]
    fn string_with_escape() {
        let p = string_literal('"', vec![standard_escape()], false).into_parser();
        assert_eq!(
            p.parse_all(r#""a\"b""#),
            Ok(vec![
                CodeSpan::new("\"a", CodeCategory::StringLiteral),
                CodeSpan::new("\\\"", CodeCategory::EscapeSequence),
                CodeSpan::new("b\"", CodeCategory::StringLiteral),
            ])
        );
    }

    #[test]
    fn single_line_string_fails_at_newline() {
        let p = string_literal('"', vec![], false);
        assert!(p.parse(&SourceCursor::new("\"open\n\"")).is_err());
        let p = string_literal('`', vec![], true);
        assert!(p.parse(&SourceCursor::new("`a\nb`")).is_ok());
    }

    #[test]
    fn char_literal_is_one_token() {
        let p = char_literal(vec![standard_escape()]).into_parser();
        assert_eq!(
            p.parse_all("'x'"),
            Ok(vec![CodeSpan::new("'x'", CodeCategory::CharLiteral)])
        );
        assert!(p.parse(&SourceCursor::new("'a ")).is_err());
    }
}
