use crate::ast::CodeCategory;
use crate::highlight::{
    SyntaxHighlighter, attribute, char_literal, hex_escape, identifiers, keywords,
    multi_line_comment, number_literal, rust_unicode_escape, single_line_comment, standard_escape,
    string_literal, words,
};

const KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut",
    "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait", "type",
    "unsafe", "use", "where", "while",
];

pub fn highlighter() -> SyntaxHighlighter {
    let escapes = || vec![rust_unicode_escape(), hex_escape(), standard_escape()];
    SyntaxHighlighter::new(
        &["rust", "rs"],
        vec![
            single_line_comment("//"),
            multi_line_comment("/*", "*/"),
            string_literal('"', escapes(), true),
            char_literal(escapes()),
            attribute("#[", "]"),
            attribute("#![", "]"),
            number_literal(true),
            words(CodeCategory::BooleanLiteral, &["true", "false"]),
            keywords(KEYWORDS),
            identifiers(true),
        ],
    )
}
