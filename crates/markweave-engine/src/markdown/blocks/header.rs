use crate::ast::{Block, Span};
use crate::parsing::BlockParserBuilder;
use crate::parsing::combinator::text::{one_of, some_of, ws};
use crate::parsing::inline::TextDelimiter;

/// ATX header: one to six `#` followed by whitespace and inline content.
pub struct Header;

impl Header {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: usize = 6;

    pub fn starts(line: &str) -> bool {
        let level = line.chars().take_while(|c| *c == Self::MARKER).count();
        (1..=Self::MAX_LEVEL).contains(&level)
            && matches!(line[level..].chars().next(), Some(' ' | '\t'))
    }

    pub fn builder() -> BlockParserBuilder {
        BlockParserBuilder::with_spans(|spans| {
            let level = some_of(Self::MARKER).map(|m| m.len()).into_parser().try_map(|n| {
                u8::try_from(n)
                    .ok()
                    .filter(|n| usize::from(*n) <= Self::MAX_LEVEL)
                    .ok_or_else(|| format!("header level {n} exceeds {}", Self::MAX_LEVEL))
            });
            let content = spans.recursive_spans(TextDelimiter::delimited_by_chars('\n').accept_eof());
            level
                .then_skip(one_of([' ', '\t']).into_parser())
                .then_skip(ws())
                .then(content)
                .map(|(level, content)| Block::Header {
                    level,
                    content: trim_end(content),
                })
                .prefixed(Self::MARKER)
        })
    }
}

fn trim_end(mut content: Vec<Span>) -> Vec<Span> {
    if let Some(Span::Text(text)) = content.last_mut() {
        let trimmed = text.trim_end().len();
        text.truncate(trimmed);
        if text.is_empty() {
            content.pop();
        }
    }
    content
}
