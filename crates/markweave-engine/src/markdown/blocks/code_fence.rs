use crate::ast::{Block, CodeSpan};
use crate::parsing::combinator::text::rest_of_line;
use crate::parsing::combinator::{Failure, Parser, PrefixedParser, SourceCursor};
use crate::parsing::{BlockParserBuilder, Highlighters};

/// Fenced code block, highlighted when a highlighter for its language is
/// registered.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: char = '`';
    pub const TILDES: char = '~';
    pub const MIN_LENGTH: usize = 3;

    /// The fence char, fence length and info string of an opening fence.
    fn opening(line: &str) -> Option<(char, usize, &str)> {
        let fence = line.chars().next().filter(|c| [Self::BACKTICKS, Self::TILDES].contains(c))?;
        let length = line.chars().take_while(|c| *c == fence).count();
        (length >= Self::MIN_LENGTH).then(|| (fence, length, line[length..].trim()))
    }

    fn closes(line: &str, fence: char, length: usize) -> bool {
        let trimmed = line.trim_end();
        trimmed.chars().count() >= length && trimmed.chars().all(|c| c == fence)
    }

    pub fn starts(line: &str) -> bool {
        Self::opening(line).is_some()
    }

    pub fn builder() -> BlockParserBuilder {
        BlockParserBuilder::recursive(|recursive| {
            let highlighters = recursive.highlighters();
            let line = rest_of_line();
            let parser = Parser::new(move |cursor: &SourceCursor| {
                let (opening, mut position) = line.parse(cursor)?;
                let (fence, length, info) = Self::opening(&opening)
                    .ok_or_else(|| Failure::new("expected code fence", cursor))?;
                let mut lines = Vec::new();
                while let Ok((content, next)) = line.parse(&position) {
                    position = next;
                    if Self::closes(&content, fence, length) {
                        break;
                    }
                    lines.push(content);
                }
                let language = info.split_whitespace().next().map(str::to_string);
                let content = highlight(&highlighters, language.as_deref(), lines.join("\n"));
                Ok((Block::CodeBlock { language, content }, position))
            });
            PrefixedParser::new([Self::BACKTICKS, Self::TILDES], parser)
        })
    }
}

fn highlight(highlighters: &Highlighters, language: Option<&str>, code: String) -> Vec<CodeSpan> {
    if code.is_empty() {
        return Vec::new();
    }
    let Some(highlighter) = language.and_then(|l| highlighters.get(l)) else {
        return vec![CodeSpan::text(code)];
    };
    match highlighter.highlight(&code) {
        Ok(spans) => spans,
        Err(failure) => {
            log::debug!("highlighting failed, keeping plain code: {failure}");
            vec![CodeSpan::text(code)]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_reads_language() {
        assert_eq!(CodeFence::opening("```rust"), Some(('`', 3, "rust")));
        assert_eq!(CodeFence::opening("~~~~ js extra"), Some(('~', 4, "js extra")));
        assert_eq!(CodeFence::opening("``x"), None);
    }

    #[test]
    fn closing_fence_must_be_as_long() {
        assert!(CodeFence::closes("````", '`', 3));
        assert!(!CodeFence::closes("``", '`', 3));
        assert!(!CodeFence::closes("~~~", '`', 3));
    }
}
