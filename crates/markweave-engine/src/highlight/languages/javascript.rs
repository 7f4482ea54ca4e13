use crate::ast::CodeCategory;
use crate::highlight::{
    SyntaxHighlighter, annotation, hex_escape, identifiers, keywords, multi_line_comment,
    number_literal, single_line_comment, standard_escape, string_literal, unicode_escape, words,
};

const KEYWORDS: &[&str] = &[
    "async", "await", "break", "case", "catch", "class", "const", "continue", "default",
    "delete", "do", "else", "export", "extends", "finally", "for", "function", "if", "import",
    "in", "instanceof", "let", "new", "of", "return", "static", "super", "switch", "this",
    "throw", "try", "typeof", "var", "void", "while", "yield",
];

pub fn highlighter() -> SyntaxHighlighter {
    let escapes = || vec![unicode_escape(), hex_escape(), standard_escape()];
    SyntaxHighlighter::new(
        &["javascript", "js"],
        vec![
            single_line_comment("//"),
            multi_line_comment("/*", "*/"),
            string_literal('"', escapes(), false),
            string_literal('\'', escapes(), false),
            string_literal('`', escapes(), true),
            annotation("@"),
            number_literal(false),
            words(CodeCategory::BooleanLiteral, &["true", "false"]),
            words(
                CodeCategory::LiteralValue,
                &["null", "undefined", "NaN", "Infinity"],
            ),
            keywords(KEYWORDS),
            identifiers(true),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::CodeSpan;

    #[test]
    fn literal_values_and_strings() {
        let spans = highlighter().highlight("let x = null ?? 'a';").unwrap();
        assert!(spans.contains(&CodeSpan::new("null", CodeCategory::LiteralValue)));
        assert!(spans.contains(&CodeSpan::new("'a'", CodeCategory::StringLiteral)));
        assert!(spans.contains(&CodeSpan::new("let", CodeCategory::Keyword)));
    }
}
