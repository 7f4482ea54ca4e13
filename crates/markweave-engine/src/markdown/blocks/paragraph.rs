use crate::ast::Block;
use crate::parsing::BlockParserBuilder;
use crate::parsing::combinator::Parser;

use super::{interrupts_paragraph, is_blank, line_where};

/// The catch-all block: consecutive non-blank lines up to a blank line or a
/// line starting another block.
pub struct Paragraph;

impl Paragraph {
    fn text() -> Parser<String> {
        let first = line_where("expected text", |line| {
            (!is_blank(line)).then(|| line.trim().to_string())
        });
        let continuation = line_where("end of paragraph", |line| {
            (!is_blank(line) && !interrupts_paragraph(line)).then(|| line.trim().to_string())
        });
        first
            .then(continuation.rep())
            .map(|(first, rest)| std::iter::once(first).chain(rest).collect::<Vec<_>>().join("\n"))
    }

    pub fn builder() -> BlockParserBuilder {
        BlockParserBuilder::with_spans(|spans| {
            spans
                .recursive_spans_of(Self::text())
                .map(Block::Paragraph)
                .into()
        })
    }
}
