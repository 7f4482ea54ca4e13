use crate::ast::CodeCategory;
use crate::highlight::{
    SyntaxHighlighter, number_literal, standard_escape, string_literal, unicode_escape, words,
};

pub fn highlighter() -> SyntaxHighlighter {
    SyntaxHighlighter::new(
        &["json"],
        vec![
            string_literal('"', vec![unicode_escape(), standard_escape()], false),
            number_literal(false),
            words(CodeCategory::BooleanLiteral, &["true", "false"]),
            words(CodeCategory::LiteralValue, &["null"]),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::CodeSpan;
    use pretty_assertions::assert_eq;

    #[test]
    fn highlights_an_object() {
        let spans = highlighter().highlight(r#"{"a": [1, true, null]}"#).unwrap();
        assert_eq!(
            spans,
            vec![
                CodeSpan::text("{"),
                CodeSpan::new("\"a\"", CodeCategory::StringLiteral),
                CodeSpan::text(": ["),
                CodeSpan::new("1", CodeCategory::NumberLiteral),
                CodeSpan::text(", "),
                CodeSpan::new("true", CodeCategory::BooleanLiteral),
                CodeSpan::text(", "),
                CodeSpan::new("null", CodeCategory::LiteralValue),
                CodeSpan::text("]}"),
            ]
        );
    }

    #[test]
    fn unknown_words_stay_plain() {
        let spans = highlighter().highlight("nope").unwrap();
        assert_eq!(spans, vec![CodeSpan::text("nope")]);
    }
}
