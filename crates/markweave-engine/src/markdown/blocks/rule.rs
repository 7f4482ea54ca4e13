use crate::ast::Block;
use crate::parsing::BlockParserBuilder;
use crate::parsing::combinator::PrefixedParser;
use crate::parsing::combinator::text::rest_of_line;

/// Thematic break: three or more of the same marker, spaces allowed.
pub struct ThematicBreak;

impl ThematicBreak {
    pub const MARKERS: [char; 3] = ['-', '*', '_'];
    pub const MIN_COUNT: usize = 3;

    pub fn matches(line: &str) -> bool {
        let mut marks = line.chars().filter(|c| !c.is_whitespace());
        let Some(first) = marks.next() else {
            return false;
        };
        Self::MARKERS.contains(&first)
            && line.chars().next() == Some(first)
            && marks.clone().all(|c| c == first)
            && marks.count() + 1 >= Self::MIN_COUNT
    }

    pub fn builder() -> BlockParserBuilder {
        let parser = rest_of_line().try_map(|line| {
            if Self::matches(&line) {
                Ok(Block::Rule)
            } else {
                Err("expected thematic break".to_string())
            }
        });
        BlockParserBuilder::standalone(PrefixedParser::new(Self::MARKERS, parser))
    }
}
