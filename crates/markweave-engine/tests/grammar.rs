use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use markweave_engine::parsing::combinator::text::literal;
use markweave_engine::parsing::combinator::success;
use markweave_engine::parsing::inline::TextDelimiter;
use markweave_engine::parsing::{BlockParserBuilder, ExtensionBundle, ParseError, RootParser};
use markweave_engine::{Block, Invalid, Markdown, Span};
use pretty_assertions::assert_eq;

/// Claims lines starting with `#` as tag containers.
struct TagBundle {
    low_precedence: bool,
    factory_calls: Arc<AtomicUsize>,
}

impl TagBundle {
    fn new(low_precedence: bool) -> Self {
        Self {
            low_precedence,
            factory_calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl ExtensionBundle for TagBundle {
    fn name(&self) -> &str {
        "tags"
    }

    fn block_parsers(&self) -> Vec<BlockParserBuilder> {
        let calls = Arc::clone(&self.factory_calls);
        let builder = BlockParserBuilder::with_spans(move |spans| {
            calls.fetch_add(1, Ordering::SeqCst);
            let content =
                spans.recursive_spans(TextDelimiter::delimited_by_chars('\n').accept_eof());
            literal("#").skip_then(content).map(|content| Block::Container {
                kind: "tag".to_string(),
                content: vec![Block::Paragraph(content)],
            })
        });
        if self.low_precedence {
            vec![builder.with_low_precedence()]
        } else {
            vec![builder]
        }
    }
}

fn parser_with(bundle: impl ExtensionBundle + 'static) -> RootParser {
    let bundles: Vec<Box<dyn ExtensionBundle>> = vec![Box::new(bundle)];
    RootParser::new(&Markdown, &bundles)
}

fn markdown() -> RootParser {
    RootParser::new(&Markdown, &[])
}

fn blocks(parser: &RootParser, input: &str) -> Vec<Block> {
    parser.parse(input).unwrap().content
}

fn is_tag(block: &Block) -> bool {
    matches!(block, Block::Container { kind, .. } if kind == "tag")
}

#[test]
fn high_precedence_extension_wins_over_host() {
    let parser = parser_with(TagBundle::new(false));
    assert!(is_tag(&blocks(&parser, "# Title")[0]));
}

#[test]
fn low_precedence_extension_only_catches_what_the_host_rejects() {
    let parser = parser_with(TagBundle::new(true));
    let result = blocks(&parser, "# Title\n\n#hashtag\n");
    assert!(matches!(result[0], Block::Header { level: 1, .. }));
    assert_eq!(
        result[1],
        Block::Container {
            kind: "tag".to_string(),
            content: vec![Block::Paragraph(vec![Span::text("hashtag")])],
        }
    );
}

#[test]
fn host_high_parser_precedes_host_low_catch_all() {
    let result = blocks(&markdown(), "---\n\n- item\n");
    assert_eq!(result[0], Block::Rule);
    assert!(matches!(result[1], Block::BulletList { marker: '-', .. }));
}

#[test]
fn failed_bucket_falls_through_to_paragraph() {
    let parser = markdown();
    assert_eq!(
        blocks(&parser, "#hashtag"),
        vec![Block::Paragraph(vec![Span::text("#hashtag")])]
    );
    assert_eq!(
        blocks(&parser, "  two-space indent"),
        vec![Block::Paragraph(vec![Span::text("two-space indent")])]
    );
}

#[test]
fn builders_run_once_per_assembly() {
    let bundle = TagBundle::new(false);
    let calls = Arc::clone(&bundle.factory_calls);
    let parser = parser_with(bundle);
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    for input in ["# a", "> # nested", "> > # deeper", "plain"] {
        parser.parse(input).unwrap();
    }
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

struct ZeroWidthBundle;

impl ExtensionBundle for ZeroWidthBundle {
    fn name(&self) -> &str {
        "zero-width"
    }

    fn block_parsers(&self) -> Vec<BlockParserBuilder> {
        vec![BlockParserBuilder::standalone(success(Block::Rule).prefixed('!'))]
    }
}

#[test]
fn block_without_progress_is_a_document_error() {
    let parser = parser_with(ZeroWidthBundle);
    match parser.parse("ok\n\n!oops") {
        Err(ParseError::Syntax { message, position }) => {
            assert_eq!(message, "block parser did not consume any input");
            assert_eq!(position.line, 3);
        }
        other => panic!("expected syntax error, got {other:?}"),
    }
}

#[test]
fn failed_nested_reparse_stays_inside_its_container() {
    let parser = parser_with(ZeroWidthBundle);
    assert_eq!(
        blocks(&parser, "a\n\n> !x\n\nb"),
        vec![
            Block::Paragraph(vec![Span::text("a")]),
            Block::QuotedBlock(vec![Block::Invalid(Invalid::error(
                "block parser did not consume any input",
                "!x"
            ))]),
            Block::Paragraph(vec![Span::text("b")]),
        ]
    );
}

#[test]
fn one_parser_serves_many_threads() {
    let parser = parser_with(markweave_engine::extensions::DirectivesBundle);
    let input = "# Title\n\n> quoted *text*\n\n- a\n- b\n\n@:note\nbody\n@:@\n";
    let expected = parser.parse(input).unwrap();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| parser.parse(input).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn crlf_input_parses_like_lf() {
    let parser = markdown();
    assert_eq!(
        parser.parse("# A\r\n\r\ntext\r\n").unwrap(),
        parser.parse("# A\n\ntext\n").unwrap()
    );
}

#[test]
fn crlf_span_input_parses_like_lf() {
    let parser = markdown();
    assert_eq!(
        parser.parse_spans("a *b*\r\nc").unwrap(),
        parser.parse_spans("a *b*\nc").unwrap()
    );
}
