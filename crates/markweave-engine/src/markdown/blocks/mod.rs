//! Markdown block parsers.
//!
//! Each block kind owns its syntax knowledge: markers, line tests and the
//! builder registering it with the grammar.

mod block_quote;
mod code_fence;
mod header;
mod list;
mod literal;
mod paragraph;
mod rule;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use header::Header;
pub use list::BulletList;
pub use literal::LiteralBlock;
pub(crate) use literal::merge_literal_blocks;
pub use paragraph::Paragraph;
pub use rule::ThematicBreak;

use crate::parsing::combinator::Parser;
use crate::parsing::combinator::text::rest_of_line;

pub(crate) fn is_blank(line: &str) -> bool {
    line.trim_matches([' ', '\t']).is_empty()
}

/// Whether `line` starts a block that ends a paragraph.
pub(crate) fn interrupts_paragraph(line: &str) -> bool {
    Header::starts(line)
        || BlockQuote::starts(line)
        || CodeFence::starts(line)
        || ThematicBreak::matches(line)
        || BulletList::starts(line)
}

/// One line transformed by `select`, newline consumed; fails where
/// `select` returns `None`.
pub(crate) fn line_where<F>(expected: &'static str, select: F) -> Parser<String>
where
    F: Fn(&str) -> Option<String> + Send + Sync + 'static,
{
    rest_of_line().try_map(move |line| select(&line).ok_or_else(|| expected.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# Title", true)]
    #[case("#tag", false)]
    #[case("> quote", true)]
    #[case("```rust", true)]
    #[case("---", true)]
    #[case("- item", true)]
    #[case("-item", false)]
    #[case("    code", false)]
    #[case("plain", false)]
    fn paragraph_interruption(#[case] line: &str, #[case] interrupts: bool) {
        assert_eq!(interrupts_paragraph(line), interrupts);
    }
}
