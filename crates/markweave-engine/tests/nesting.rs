use markweave_engine::parsing::combinator::text::literal;
use markweave_engine::parsing::inline::TextDelimiter;
use markweave_engine::parsing::{ExtensionBundle, MAX_NEST_LEVEL, RootParser, SpanParserBuilder};
use markweave_engine::{Block, Markdown, Span};
use pretty_assertions::assert_eq;

/// `(…)` groups nesting without limit in the input.
struct GroupBundle;

impl ExtensionBundle for GroupBundle {
    fn name(&self) -> &str {
        "groups"
    }

    fn span_parsers(&self) -> Vec<SpanParserBuilder> {
        vec![SpanParserBuilder::recursive(|spans| {
            literal("(")
                .skip_then(spans.recursive_spans(TextDelimiter::delimited_by(")")))
                .map(|content| Span::Styled {
                    style: "group".to_string(),
                    content,
                })
        })]
    }
}

fn markdown() -> RootParser {
    RootParser::new(&Markdown, &[])
}

/// Follows the first child block through nested quotes.
fn unwrap_quotes(mut block: &Block) -> (usize, &Block) {
    let mut depth = 0;
    while let Block::QuotedBlock(content) = block {
        depth += 1;
        block = &content[0];
    }
    (depth, block)
}

#[test]
fn sixteen_quote_markers_stop_at_the_cap() {
    let input = format!("{} text\n\nmore text", ">".repeat(16));
    let root = markdown().parse(&input).unwrap();

    let (depth, innermost) = unwrap_quotes(&root.content[0]);
    assert_eq!(depth, MAX_NEST_LEVEL);
    assert_eq!(innermost, &Block::Paragraph(vec![Span::text(">>>> text")]));
    assert_eq!(root.content[1], Block::Paragraph(vec![Span::text("more text")]));
}

#[test]
fn capped_level_keeps_non_recursive_blocks_and_spans() {
    let input = format!("{} # *a* `b`", ">".repeat(MAX_NEST_LEVEL));
    let root = markdown().parse(&input).unwrap();

    let (depth, innermost) = unwrap_quotes(&root.content[0]);
    assert_eq!(depth, MAX_NEST_LEVEL);
    assert_eq!(
        innermost,
        &Block::Header {
            level: 1,
            content: vec![Span::text("*a* "), Span::Literal("b".to_string())],
        }
    );
}

#[test]
fn spans_inside_blocks_count_toward_the_same_cap() {
    let parser = markdown();
    let header_at = |quotes: usize| {
        let root = parser.parse(&format!("{} # *a*", ">".repeat(quotes))).unwrap();
        let (depth, innermost) = unwrap_quotes(&root.content[0]);
        assert_eq!(depth, quotes);
        innermost.clone()
    };

    assert_eq!(
        header_at(MAX_NEST_LEVEL - 2),
        Block::Header {
            level: 1,
            content: vec![Span::Emphasized(vec![Span::text("a")])],
        }
    );
    assert_eq!(
        header_at(MAX_NEST_LEVEL - 1),
        Block::Header {
            level: 1,
            content: vec![Span::text("*a*")],
        }
    );
}

#[test]
fn span_nesting_shares_the_cap() {
    let bundles: Vec<Box<dyn ExtensionBundle>> = vec![Box::new(GroupBundle)];
    let parser = RootParser::new(&Markdown, &bundles);
    let input = format!("{}x{}", "(".repeat(16), ")".repeat(16));
    let spans = parser.parse_spans(&input).unwrap();

    let mut depth = 0;
    let mut current = &spans;
    while let Some(Span::Styled { content, .. }) = current.first() {
        depth += 1;
        current = content;
    }
    assert_eq!(depth, MAX_NEST_LEVEL - 1);
    assert_eq!(current, &vec![Span::text("(((((x")]);
    assert_eq!(spans.last(), Some(&Span::text(")))))")));
}
