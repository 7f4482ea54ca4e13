//! Plain-text rendering of a parsed document, one node per line.
//!
//! Used by the CLI's `tree` output and by snapshot tests. Text content is
//! shown quoted and shortened with [`preview`].

use crate::ast::{Block, CodeSpan, Invalid, RootElement, Span};

const PREVIEW_CHARS: usize = 60;
const INDENT: &str = "  ";

/// Shortens `text` to at most `max_chars` chars, marking the cut with `...`.
pub fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

pub fn format_tree(root: &RootElement) -> String {
    let mut writer = TreeWriter::default();
    for block in &root.content {
        writer.block(block, 0);
    }
    writer.out
}

#[derive(Default)]
struct TreeWriter {
    out: String,
}

impl TreeWriter {
    fn line(&mut self, depth: usize, text: &str) {
        for _ in 0..depth {
            self.out.push_str(INDENT);
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn quoted(text: &str) -> String {
        format!("{:?}", preview(text, PREVIEW_CHARS))
    }

    fn invalid(&mut self, invalid: &Invalid, depth: usize) {
        let line = format!(
            "Invalid({}) {}: {}",
            invalid.message.level,
            Self::quoted(&invalid.source),
            invalid.message.content
        );
        self.line(depth, &line);
    }

    fn block(&mut self, block: &Block, depth: usize) {
        match block {
            Block::Paragraph(content) => {
                self.line(depth, "Paragraph");
                self.spans(content, depth + 1);
            }
            Block::Header { level, content } => {
                self.line(depth, &format!("Header({level})"));
                self.spans(content, depth + 1);
            }
            Block::QuotedBlock(content) => {
                self.line(depth, "QuotedBlock");
                self.blocks(content, depth + 1);
            }
            Block::BulletList { marker, items } => {
                self.line(depth, &format!("BulletList({marker})"));
                for item in items {
                    self.line(depth + 1, "Item");
                    self.blocks(item, depth + 2);
                }
            }
            Block::CodeBlock { language, content } => {
                let header = match language {
                    Some(language) => format!("CodeBlock({language})"),
                    None => "CodeBlock".to_string(),
                };
                self.line(depth, &header);
                self.code(content, depth + 1);
            }
            Block::LiteralBlock(text) => {
                self.line(depth, &format!("LiteralBlock {}", Self::quoted(text)));
            }
            Block::Rule => self.line(depth, "Rule"),
            Block::Container { kind, content } => {
                self.line(depth, &format!("Container({kind})"));
                self.blocks(content, depth + 1);
            }
            Block::Invalid(invalid) => self.invalid(invalid, depth),
        }
    }

    fn blocks(&mut self, blocks: &[Block], depth: usize) {
        for block in blocks {
            self.block(block, depth);
        }
    }

    fn spans(&mut self, spans: &[Span], depth: usize) {
        for span in spans {
            match span {
                Span::Text(text) => self.line(depth, &format!("Text {}", Self::quoted(text))),
                Span::Literal(text) => {
                    self.line(depth, &format!("Literal {}", Self::quoted(text)));
                }
                Span::Emphasized(content) => {
                    self.line(depth, "Emphasized");
                    self.spans(content, depth + 1);
                }
                Span::Strong(content) => {
                    self.line(depth, "Strong");
                    self.spans(content, depth + 1);
                }
                Span::Link { content, target } => {
                    self.line(depth, &format!("Link({target})"));
                    self.spans(content, depth + 1);
                }
                Span::Styled { style, content } => {
                    self.line(depth, &format!("Styled({style})"));
                    self.spans(content, depth + 1);
                }
                Span::Invalid(invalid) => self.invalid(invalid, depth),
            }
        }
    }

    fn code(&mut self, spans: &[CodeSpan], depth: usize) {
        for span in spans {
            let category = span.category.map_or("text", |c| c.as_str());
            self.line(depth, &format!("{category} {}", Self::quoted(&span.content)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::CodeCategory;
    use pretty_assertions::assert_eq;

    #[test]
    fn preview_short_text_unchanged() {
        assert_eq!(preview("hello", 10), "hello");
        assert_eq!(preview("hello", 5), "hello");
    }

    #[test]
    fn preview_truncates_on_char_boundaries() {
        assert_eq!(preview("hello world", 5), "hello...");
        assert_eq!(preview("héllo", 2), "hé...");
        assert_eq!(preview("hello", 0), "...");
    }

    #[test]
    fn nested_nodes_are_indented() {
        let root = RootElement::new(vec![
            Block::QuotedBlock(vec![Block::Paragraph(vec![
                Span::text("a "),
                Span::Strong(vec![Span::text("b")]),
            ])]),
            Block::CodeBlock {
                language: Some("rust".to_string()),
                content: vec![CodeSpan::new("fn", CodeCategory::Keyword), CodeSpan::text(" x")],
            },
            Block::Rule,
        ]);
        let expected = "QuotedBlock\n  Paragraph\n    Text \"a \"\n    Strong\n      Text \"b\"\n\
                        CodeBlock(rust)\n  keyword \"fn\"\n  text \" x\"\nRule\n";
        assert_eq!(format_tree(&root), expected);
    }

    #[test]
    fn invalid_nodes_show_level_source_and_message() {
        let root = RootElement::new(vec![Block::Invalid(Invalid::error("boom", "@:x"))]);
        assert_eq!(format_tree(&root), "Invalid(error) \"@:x\": boom\n");
    }
}
