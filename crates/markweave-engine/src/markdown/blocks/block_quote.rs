use crate::ast::Block;
use crate::parsing::BlockParserBuilder;

use super::{interrupts_paragraph, is_blank, line_where};

/// Quoted block: lines prefixed with `>`, plus lazy continuation lines.
pub struct BlockQuote;

impl BlockQuote {
    pub const PREFIX: char = '>';

    pub fn starts(line: &str) -> bool {
        line.starts_with(Self::PREFIX)
    }

    /// Removes one `>` and the single space following it.
    pub fn strip_prefix(line: &str) -> Option<&str> {
        let rest = line.strip_prefix(Self::PREFIX)?;
        Some(rest.strip_prefix(' ').unwrap_or(rest))
    }

    pub fn builder() -> BlockParserBuilder {
        BlockParserBuilder::recursive(|recursive| {
            let first = line_where("expected '>'", |line| {
                Self::strip_prefix(line).map(str::to_string)
            });
            let continuation = line_where("end of quoted block", |line| {
                match Self::strip_prefix(line) {
                    Some(stripped) => Some(stripped.to_string()),
                    None if !is_blank(line) && !interrupts_paragraph(line) => {
                        Some(line.to_string())
                    }
                    None => None,
                }
            });
            let source = first.then(continuation.rep()).map(|(first, rest)| {
                std::iter::once(first).chain(rest).collect::<Vec<_>>().join("\n")
            });
            recursive
                .recursive_blocks(source)
                .map(Block::QuotedBlock)
                .prefixed(Self::PREFIX)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_single_prefix() {
        assert_eq!(BlockQuote::strip_prefix("> hello"), Some("hello"));
        assert_eq!(BlockQuote::strip_prefix(">> nested"), Some("> nested"));
        assert_eq!(BlockQuote::strip_prefix("hello"), None);
    }
}
