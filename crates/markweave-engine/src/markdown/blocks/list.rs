use crate::ast::Block;
use crate::parsing::combinator::text::blank_lines;
use crate::parsing::combinator::{Parser, PrefixedParser};
use crate::parsing::{BlockParserBuilder, RecursiveParsers};

use super::{interrupts_paragraph, is_blank, line_where};

/// Bullet list. Items of one list share their marker; each item's content
/// is parsed as nested blocks.
pub struct BulletList;

impl BulletList {
    pub const MARKERS: [char; 3] = ['-', '*', '+'];
    pub const INDENT: &'static str = "  ";

    /// The item text after `marker` and one space.
    fn item_start(line: &str, marker: char) -> Option<&str> {
        let rest = line.strip_prefix(marker)?;
        if rest.is_empty() {
            Some(rest)
        } else {
            rest.strip_prefix([' ', '\t'])
        }
    }

    pub fn starts(line: &str) -> bool {
        Self::MARKERS
            .iter()
            .any(|m| Self::item_start(line, *m).is_some())
    }

    fn item_source(marker: char) -> Parser<String> {
        let first = line_where("expected list item", move |line| {
            Self::item_start(line, marker).map(str::to_string)
        });
        let continuation = line_where("end of list item", |line| {
            match line.strip_prefix(Self::INDENT) {
                Some(indented) => Some(indented.to_string()),
                None if !is_blank(line) && !interrupts_paragraph(line) => Some(line.to_string()),
                None => None,
            }
        });
        first.then(continuation.rep()).map(|(first, rest)| {
            std::iter::once(first).chain(rest).collect::<Vec<_>>().join("\n")
        })
    }

    fn list(recursive: &dyn RecursiveParsers, marker: char) -> PrefixedParser<Block> {
        let item = recursive.recursive_blocks(Self::item_source(marker));
        let more = blank_lines().skip_then(item.clone()).rep();
        item.then(more)
            .map(move |(first, rest)| Block::BulletList {
                marker,
                items: std::iter::once(first).chain(rest).collect(),
            })
            .prefixed(marker)
    }

    pub fn builder() -> BlockParserBuilder {
        BlockParserBuilder::recursive(|recursive| {
            let [dash, star, plus] = Self::MARKERS;
            Self::list(recursive, dash)
                .or(Self::list(recursive, star))
                .or(Self::list(recursive, plus))
        })
        .with_low_precedence()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_start_needs_space_after_marker() {
        assert_eq!(BulletList::item_start("- a", '-'), Some("a"));
        assert_eq!(BulletList::item_start("-a", '-'), None);
        assert_eq!(BulletList::item_start("* a", '-'), None);
    }
}
