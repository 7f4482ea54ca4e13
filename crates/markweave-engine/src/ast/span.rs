use serde::Serialize;

use super::message::Invalid;

/// Inline content inside a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Span {
    Text(String),
    Emphasized(Vec<Span>),
    Strong(Vec<Span>),
    /// Verbatim text, e.g. a code span.
    Literal(String),
    Link {
        content: Vec<Span>,
        target: String,
    },
    /// Content tagged with a named style by an extension.
    Styled {
        style: String,
        content: Vec<Span>,
    },
    Invalid(Invalid),
}

impl Span {
    pub fn text(content: impl Into<String>) -> Self {
        Span::Text(content.into())
    }

    /// Nested spans, if this span has any.
    pub fn children(&self) -> &[Span] {
        match self {
            Span::Emphasized(content)
            | Span::Strong(content)
            | Span::Link { content, .. }
            | Span::Styled { content, .. } => content,
            Span::Text(_) | Span::Literal(_) | Span::Invalid(_) => &[],
        }
    }
}

/// Appends `span`, merging consecutive text but never across another node.
pub fn push_span(spans: &mut Vec<Span>, span: Span) {
    match (spans.last_mut(), span) {
        (_, Span::Text(text)) if text.is_empty() => {}
        (Some(Span::Text(last)), Span::Text(text)) => last.push_str(&text),
        (_, span) => spans.push(span),
    }
}
