//! Syntax highlighting on top of the inline scanner.
//!
//! A highlighter is a set of code span parsers embedded into one scan over
//! the whole code block. Text no parser claims stays uncategorized.

mod comment;
mod escapes;
mod identifier;
mod keywords;
pub mod languages;
mod numeric;
mod string_literal;

use crate::ast::{CodeCategory, CodeSpan};
use crate::parsing::combinator::{Failure, Parser, PrefixedParser};
use crate::parsing::inline::{self, CodeSpanBuilder, ResultBuilder, TextDelimiter};

pub use comment::{multi_line_comment, single_line_comment};
pub use escapes::{hex_escape, rust_unicode_escape, standard_escape, unicode_escape};
pub use identifier::{annotation, attribute, identifiers};
pub use keywords::{keywords, words};
pub use numeric::number_literal;
pub use string_literal::{char_literal, string_literal};

/// A parser for one kind of code token.
pub type CodeSpanParser = PrefixedParser<Vec<CodeSpan>>;

/// A named highlighter for one language.
#[derive(Debug, Clone)]
pub struct SyntaxHighlighter {
    names: Vec<String>,
    root: Parser<Vec<CodeSpan>>,
}

impl SyntaxHighlighter {
    /// Parsers sharing a start char are tried in the order given.
    pub fn new(names: &[&str], span_parsers: Vec<CodeSpanParser>) -> Self {
        let root = inline::code_spans(TextDelimiter::until_eof(), None)
            .embed_all(span_parsers)
            .into_parser();
        Self {
            names: names.iter().map(|n| n.to_string()).collect(),
            root,
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn root_parser(&self) -> &Parser<Vec<CodeSpan>> {
        &self.root
    }

    pub fn highlight(&self, code: &str) -> Result<Vec<CodeSpan>, Failure> {
        self.root.parse_all(code)
    }
}

/// Wraps `content` in its delimiters as one token of `category`; nested
/// tokens of other categories stay separate.
fn enclose(open: &str, content: Vec<CodeSpan>, close: &str, category: CodeCategory) -> Vec<CodeSpan> {
    let mut builder = CodeSpanBuilder::new(Some(category));
    builder.add_text(open);
    for span in content {
        if span.category == Some(category) {
            builder.add_text(&span.content);
        } else {
            builder.add_element(vec![span]);
        }
    }
    builder.add_text(close);
    builder.result()
}

/// A single token of `category` covering everything `parser` consumed.
fn token<T: 'static>(parser: PrefixedParser<T>, category: CodeCategory) -> CodeSpanParser {
    parser
        .source()
        .map(move |text| vec![CodeSpan::new(text, category)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn comment_tokenizer_scenario() {
        let highlighter = SyntaxHighlighter::new(
            &["test"],
            vec![single_line_comment("//"), multi_line_comment("/*", "*/")],
        );
        assert_eq!(
            highlighter.highlight("line 1\nline 2 // comment\nline 3"),
            Ok(vec![
                CodeSpan::text("line 1\nline 2 "),
                CodeSpan::new("// comment\n", CodeCategory::Comment),
                CodeSpan::text("line 3"),
            ])
        );
    }

    #[test]
    fn enclose_merges_same_category_only() {
        let spans = enclose(
            "\"",
            vec![
                CodeSpan::new("a", CodeCategory::StringLiteral),
                CodeSpan::new("\\n", CodeCategory::EscapeSequence),
            ],
            "\"",
            CodeCategory::StringLiteral,
        );
        assert_eq!(
            spans,
            vec![
                CodeSpan::new("\"a", CodeCategory::StringLiteral),
                CodeSpan::new("\\n", CodeCategory::EscapeSequence),
                CodeSpan::new("\"", CodeCategory::StringLiteral),
            ]
        );
    }
}
