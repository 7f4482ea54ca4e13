//! Directives: named blocks and spans marked with `@:`.
//!
//! ```text
//! @:note
//! Block content, parsed as nested blocks.
//! @:@
//!
//! Inline @:highlight{styled *content*} in a paragraph.
//! ```
//!
//! Once a directive marker is recognized the construct is committed: a
//! malformed directive becomes an invalid element instead of plain text.

use crate::ast::{Block, Span};
use crate::parsing::combinator::text::{any_of, literal, rest_of_line, some_of};
use crate::parsing::combinator::{
    CharSet, Failure, Parser, PrefixedParser, SourceCursor, failure,
};
use crate::parsing::inline::TextDelimiter;
use crate::parsing::{
    BlockParserBuilder, ExtensionBundle, RecursiveParsers, RecursiveSpanParsers,
    SpanParserBuilder, committed,
};

pub const MARKER: &str = "@:";
pub const BLOCK_END: &str = "@:@";
pub const BLOCK_NAMES: [&str; 3] = ["note", "warning", "tip"];

fn name_chars() -> CharSet {
    CharSet::range('a'..='z').union(&CharSet::from('-'))
}

/// The block body: lines up to the closing `@:@` line.
fn block_body() -> Parser<String> {
    let line = rest_of_line();
    Parser::new(move |cursor: &SourceCursor| {
        let mut lines = Vec::new();
        let mut position = cursor.clone();
        loop {
            let Ok((content, next)) = line.parse(&position) else {
                let message = format!("missing directive end '{BLOCK_END}'");
                return Err(Failure::new(message, &position));
            };
            position = next;
            if content.trim_end() == BLOCK_END {
                return Ok((lines.join("\n"), position));
            }
            lines.push(content);
        }
    })
}

/// Skips the rest of a broken block directive, up to the next blank line.
fn skip_paragraph() -> Parser<()> {
    rest_of_line()
        .try_map(|line| {
            if line.trim().is_empty() {
                Err("blank line".to_string())
            } else {
                Ok(())
            }
        })
        .rep()
        .void()
}

/// `@:name` alone on its line. Anything else after the name leaves the line
/// to other parsers.
fn block_header() -> PrefixedParser<String> {
    let end_of_line = rest_of_line().try_map(|rest| {
        if rest.trim().is_empty() {
            Ok(())
        } else {
            Err("expected end of directive line".to_string())
        }
    });
    literal(MARKER)
        .skip_then(some_of(name_chars()).into_parser())
        .then_skip(end_of_line)
}

fn block_directive(recursive: &dyn RecursiveParsers) -> PrefixedParser<Block> {
    let content = recursive.recursive_blocks(block_body());
    committed(
        block_header(),
        move |name: String| {
            let content = content.clone();
            if BLOCK_NAMES.contains(&name.as_str()) {
                content.map(move |content| Block::Container {
                    kind: name.clone(),
                    content,
                })
            } else {
                failure(format!("unknown directive '{name}'"))
            }
        },
        skip_paragraph(),
        Block::Invalid,
    )
}

fn span_directive(spans: &dyn RecursiveSpanParsers) -> PrefixedParser<Span> {
    let body = some_of(name_chars())
        .into_parser()
        .then_skip(literal("{").into_parser())
        .then(spans.recursive_spans(TextDelimiter::delimited_by("}")))
        .map(|(style, content)| Span::Styled { style, content });
    committed(
        literal(MARKER),
        move |_| body.clone(),
        any_of(name_chars()).void(),
        Span::Invalid,
    )
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DirectivesBundle;

impl ExtensionBundle for DirectivesBundle {
    fn name(&self) -> &str {
        "directives"
    }

    fn block_parsers(&self) -> Vec<BlockParserBuilder> {
        vec![BlockParserBuilder::recursive(block_directive)]
    }

    fn span_parsers(&self) -> Vec<SpanParserBuilder> {
        vec![SpanParserBuilder::recursive(span_directive)]
    }
}
