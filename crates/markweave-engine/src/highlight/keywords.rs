use std::collections::HashSet;
use std::sync::Arc;

use crate::ast::{CodeCategory, CodeSpan};
use crate::parsing::combinator::text::chars_while;
use crate::parsing::combinator::{CharSet, Failure, Parser, PrefixedParser, SourceCursor};

use super::CodeSpanParser;

pub(crate) fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// A whole identifier-like word, not preceded by an identifier char.
pub(crate) fn word() -> Parser<String> {
    let run = chars_while(is_identifier_char);
    Parser::new(move |cursor: &SourceCursor| {
        if cursor.previous_char().is_some_and(is_identifier_char) {
            return Err(Failure::new("not at a word boundary", cursor));
        }
        match run.parse(cursor)? {
            (word, _) if word.is_empty() => Err(Failure::new("expected a word", cursor)),
            found => Ok(found),
        }
    })
}

/// Any of `list` as a whole word, tagged with `category`.
pub fn words(category: CodeCategory, list: &[&str]) -> CodeSpanParser {
    let start_chars: CharSet = list.iter().filter_map(|w| w.chars().next()).collect();
    let known: Arc<HashSet<String>> = Arc::new(list.iter().map(|w| w.to_string()).collect());
    let word = word();
    let parser = Parser::new(move |cursor: &SourceCursor| {
        let (found, next) = word.parse(cursor)?;
        if known.contains(&found) {
            Ok((vec![CodeSpan::new(found, category)], next))
        } else {
            Err(Failure::new(format!("'{found}' is not a {category}"), cursor))
        }
    });
    PrefixedParser::new(start_chars, parser)
}

pub fn keywords(list: &[&str]) -> CodeSpanParser {
    words(CodeCategory::Keyword, list)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_match_whole_words_only() {
        let p = keywords(&["fn", "let"]).into_parser();
        assert_eq!(
            p.parse_all("fn"),
            Ok(vec![CodeSpan::new("fn", CodeCategory::Keyword)])
        );
        assert!(p.parse(&SourceCursor::new("fnord")).is_err());
    }

    #[test]
    fn keywords_need_a_boundary_before() {
        let p = keywords(&["let"]).into_parser();
        let cursor = SourceCursor::new("xlet").consume(1);
        assert!(p.parse(&cursor).is_err());
    }
}
