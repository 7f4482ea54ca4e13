use std::sync::OnceLock;

use regex::Regex;

use crate::ast::CodeCategory;
use crate::parsing::combinator::text::{literal, one_char, regex};

use super::{CodeSpanParser, token};

fn escape_regex(cell: &'static OnceLock<Regex>, pattern: &str) -> CodeSpanParser {
    let re = cell.get_or_init(|| Regex::new(pattern).expect("Invalid escape regex"));
    token(
        regex(re).prefixed('\\'),
        CodeCategory::EscapeSequence,
    )
}

/// A backslash followed by any char.
pub fn standard_escape() -> CodeSpanParser {
    token(literal("\\").then(one_char()), CodeCategory::EscapeSequence)
}

/// `\uXXXX`
pub fn unicode_escape() -> CodeSpanParser {
    static RE: OnceLock<Regex> = OnceLock::new();
    escape_regex(&RE, r"^\\u[0-9a-fA-F]{4}")
}

/// `\u{X...}` with up to six hex digits.
pub fn rust_unicode_escape() -> CodeSpanParser {
    static RE: OnceLock<Regex> = OnceLock::new();
    escape_regex(&RE, r"^\\u\{[0-9a-fA-F]{1,6}\}")
}

/// `\xXX`
pub fn hex_escape() -> CodeSpanParser {
    static RE: OnceLock<Regex> = OnceLock::new();
    escape_regex(&RE, r"^\\x[0-9a-fA-F]{2}")
}
