use crate::ast::{CodeCategory, CodeSpan};
use crate::parsing::combinator::text::{chars_while, literal, one_if};
use crate::parsing::combinator::{CharSet, PrefixedParser};
use crate::parsing::inline::TextDelimiter;

use super::keywords::{is_identifier_char, word};
use super::{CodeSpanParser, token};

/// Identifiers; with `detect_type_names`, capitalized ones are type names.
pub fn identifiers(detect_type_names: bool) -> CodeSpanParser {
    let start_chars = CharSet::range('a'..='z')
        .union(&CharSet::range('A'..='Z'))
        .union(&CharSet::from('_'));
    let parser = word().map(move |name| {
        let category = if detect_type_names && name.starts_with(|c: char| c.is_uppercase()) {
            CodeCategory::TypeName
        } else {
            CodeCategory::Identifier
        };
        vec![CodeSpan::new(name, category)]
    });
    PrefixedParser::new(start_chars, parser)
}

/// A `start` marker directly followed by a name, e.g. `@Override`.
pub fn annotation(start: &str) -> CodeSpanParser {
    let name = one_if(is_identifier_char).then(chars_while(|c| is_identifier_char(c) || c == '.'));
    token(literal(start).then(name), CodeCategory::Annotation)
}

/// An attribute running from `start` to `end` on one line, e.g. `#[test]`.
pub fn attribute(start: &str, end: &str) -> CodeSpanParser {
    let body = TextDelimiter::delimited_by(end).fail_on('\n').into_parser();
    token(literal(start).then(body), CodeCategory::Annotation)
}
