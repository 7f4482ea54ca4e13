//! Bounds on recursive descent.

use crate::ast::Block;
use crate::parsing::combinator::{Failure, Parser, SourceCursor, text::blank_lines};

/// Recursion depth up to which the full grammar is available. Deeper
/// content is parsed with non-recursive parsers only.
pub const MAX_NEST_LEVEL: usize = 12;

/// Whether content at `level` must be parsed with the fallback tables.
pub fn is_capped(level: usize) -> bool {
    level >= MAX_NEST_LEVEL
}

/// A sequence of blocks separated by blank lines, covering the whole input.
pub fn block_list(block: Parser<Block>) -> Parser<Vec<Block>> {
    let skip = blank_lines();
    Parser::new(move |cursor: &SourceCursor| {
        let (_, mut position) = skip.parse(cursor)?;
        let mut blocks = Vec::new();
        while !position.at_end() {
            let (parsed, next) = block.parse(&position)?;
            if next.offset() == position.offset() {
                return Err(Failure::new("block parser did not consume any input", &position));
            }
            blocks.push(parsed);
            let (_, next) = skip.parse(&next)?;
            position = next;
        }
        Ok((blocks, position))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Span;
    use crate::parsing::combinator::text::rest_of_line;

    fn line_paragraph() -> Parser<Block> {
        rest_of_line().map(|line| Block::Paragraph(vec![Span::Text(line)]))
    }

    #[test]
    fn cap_starts_at_max_level() {
        assert!(!is_capped(MAX_NEST_LEVEL - 1));
        assert!(is_capped(MAX_NEST_LEVEL));
    }

    #[test]
    fn block_list_skips_blank_lines() {
        let blocks = block_list(line_paragraph()).parse_all("\none\n\n  \ntwo\n").unwrap();
        assert_eq!(blocks.len(), 2);
    }

    #[test]
    fn block_list_fails_on_unparseable_block() {
        let never = crate::parsing::combinator::failure::<Block>("nope");
        assert!(block_list(never).parse_all("text").is_err());
        assert_eq!(block_list(line_paragraph()).parse_all(""), Ok(vec![]));
    }
}
