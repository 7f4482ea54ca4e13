use std::fmt;

use serde::Serialize;

/// The category of a highlighted source code token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeCategory {
    Comment,
    Keyword,
    BooleanLiteral,
    LiteralValue,
    NumberLiteral,
    StringLiteral,
    CharLiteral,
    EscapeSequence,
    Identifier,
    TypeName,
    Annotation,
}

impl CodeCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            CodeCategory::Comment => "comment",
            CodeCategory::Keyword => "keyword",
            CodeCategory::BooleanLiteral => "boolean-literal",
            CodeCategory::LiteralValue => "literal-value",
            CodeCategory::NumberLiteral => "number-literal",
            CodeCategory::StringLiteral => "string-literal",
            CodeCategory::CharLiteral => "char-literal",
            CodeCategory::EscapeSequence => "escape-sequence",
            CodeCategory::Identifier => "identifier",
            CodeCategory::TypeName => "type-name",
            CodeCategory::Annotation => "annotation",
        }
    }
}

impl fmt::Display for CodeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A leaf of highlighted source code.
///
/// Adjacent uncategorized spans may be merged; categorized spans never are.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeSpan {
    pub content: String,
    pub category: Option<CodeCategory>,
}

impl CodeSpan {
    pub fn new(content: impl Into<String>, category: CodeCategory) -> Self {
        Self {
            content: content.into(),
            category: Some(category),
        }
    }

    /// An uncategorized span.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            category: None,
        }
    }

    pub fn is_mergeable(&self) -> bool {
        self.category.is_none()
    }
}

/// Appends `span`, merging it into the last span when both are uncategorized.
pub fn push_code_span(spans: &mut Vec<CodeSpan>, span: CodeSpan) {
    if span.content.is_empty() {
        return;
    }
    match spans.last_mut() {
        Some(last) if last.is_mergeable() && span.is_mergeable() => {
            last.content.push_str(&span.content)
        }
        _ => spans.push(span),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_uncategorized_spans_merge() {
        let mut spans = Vec::new();
        push_code_span(&mut spans, CodeSpan::text("a"));
        push_code_span(&mut spans, CodeSpan::text("b"));
        push_code_span(&mut spans, CodeSpan::new("fn", CodeCategory::Keyword));
        push_code_span(&mut spans, CodeSpan::new("x", CodeCategory::Keyword));
        assert_eq!(
            spans,
            vec![
                CodeSpan::text("ab"),
                CodeSpan::new("fn", CodeCategory::Keyword),
                CodeSpan::new("x", CodeCategory::Keyword),
            ]
        );
    }
}
