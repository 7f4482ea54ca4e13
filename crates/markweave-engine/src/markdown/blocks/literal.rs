use crate::ast::Block;
use crate::parsing::BlockParserBuilder;
use crate::parsing::combinator::PrefixedParser;

use super::line_where;

/// Indented literal block.
pub struct LiteralBlock;

impl LiteralBlock {
    pub const INDENT: &'static str = "    ";

    pub fn strip_indent(line: &str) -> Option<&str> {
        line.strip_prefix('\t')
            .or_else(|| line.strip_prefix(Self::INDENT))
    }

    pub fn builder() -> BlockParserBuilder {
        let line = line_where("expected indented line", |line| {
            Self::strip_indent(line).map(str::to_string)
        });
        let parser = line.rep_min(1).map(|lines| Block::LiteralBlock(lines.join("\n")));
        BlockParserBuilder::standalone(PrefixedParser::new([' ', '\t'], parser))
    }
}

/// Joins literal blocks that were only separated by blank lines.
pub(crate) fn merge_literal_blocks(blocks: Vec<Block>) -> Vec<Block> {
    let mut merged: Vec<Block> = Vec::with_capacity(blocks.len());
    for block in blocks {
        match (merged.last_mut(), block) {
            (Some(Block::LiteralBlock(previous)), Block::LiteralBlock(next)) => {
                previous.push_str("\n\n");
                previous.push_str(&next);
            }
            (_, block) => merged.push(block),
        }
    }
    merged
}
