use std::time::{Duration, Instant};

use markweave_engine::parsing::combinator::PrefixedParser;
use markweave_engine::parsing::combinator::text::{literal, some_not};
use markweave_engine::parsing::inline::{self, TextDelimiter};
use markweave_engine::parsing::RootParser;
use markweave_engine::{Markdown, Span};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn spans(input: &str) -> Vec<Span> {
    RootParser::new(&Markdown, &[]).parse_spans(input).unwrap()
}

#[test]
fn text_does_not_merge_across_structured_children() {
    assert_eq!(
        spans("a *b* c"),
        vec![
            Span::text("a "),
            Span::Emphasized(vec![Span::text("b")]),
            Span::text(" c"),
        ]
    );
}

#[rstest]
#[case("*a", "*a")]
#[case("[x] y", "[x] y")]
#[case("a * b", "a * b")]
#[case("``", "``")]
fn failed_nested_parse_keeps_the_char_as_text(#[case] input: &str, #[case] text: &str) {
    assert_eq!(spans(input), vec![Span::text(text)]);
}

#[test]
fn scanning_resumes_after_a_failed_start_char() {
    assert_eq!(
        spans("[no *yes*"),
        vec![
            Span::text("[no "),
            Span::Emphasized(vec![Span::text("yes")]),
        ]
    );
}

#[test]
fn escapes_produce_plain_text() {
    assert_eq!(spans(r"\*not emphasis\*"), vec![Span::text("*not emphasis*")]);
}

fn angle() -> PrefixedParser<Span> {
    literal("<")
        .skip_then(some_not(">"))
        .then_skip(literal(">").into_parser())
        .map(Span::Literal)
}

#[rstest]
#[case("<abc>")]
#[case("<a b>")]
#[case("<*>")]
fn embedded_span_round_trips(#[case] rendered: &str) {
    let direct = angle().parser().parse_all(rendered).unwrap();
    let body = inline::spans(TextDelimiter::delimited_by("|"))
        .embed(angle())
        .into_parser();
    let embedded = literal("|")
        .skip_then(body)
        .into_parser()
        .parse_all(&format!("|{rendered}|"))
        .unwrap();
    assert_eq!(embedded, vec![direct]);
}

#[rstest]
#[case("[")]
#[case("*a ")]
fn unclosed_markers_do_not_compound_across_levels(#[case] run: &str) {
    let input = run.repeat(300);
    let parser = RootParser::new(&Markdown, &[]);
    let started = Instant::now();
    let root = parser.parse(&input).unwrap();
    assert!(
        started.elapsed() < Duration::from_secs(5),
        "parsing took {:?}",
        started.elapsed()
    );
    assert_eq!(
        root.content,
        vec![markweave_engine::Block::Paragraph(vec![Span::text(input.trim_end())])]
    );
}
