use crate::ast::{CodeCategory, CodeSpan, Span, push_code_span, push_span};

/// Accumulates the result of an inline scan.
///
/// Plain text is buffered and only flushed when a structured element is
/// added or the result is taken, so consecutive text always merges and
/// never merges across an element.
pub trait ResultBuilder: Send + 'static {
    type Element: 'static;
    type Output: 'static;

    fn add_text(&mut self, text: &str);
    fn add_element(&mut self, element: Self::Element);
    fn result(self) -> Self::Output;
}

/// Collects plain text; nested elements are themselves strings.
#[derive(Debug, Default)]
pub struct TextBuilder {
    text: String,
}

impl ResultBuilder for TextBuilder {
    type Element = String;
    type Output = String;

    fn add_text(&mut self, text: &str) {
        self.text.push_str(text);
    }

    fn add_element(&mut self, element: String) {
        self.text.push_str(&element);
    }

    fn result(self) -> String {
        self.text
    }
}

#[derive(Debug, Default)]
pub struct SpanBuilder {
    pending: String,
    spans: Vec<Span>,
}

impl SpanBuilder {
    fn flush(&mut self) {
        if !self.pending.is_empty() {
            push_span(&mut self.spans, Span::Text(std::mem::take(&mut self.pending)));
        }
    }
}

impl ResultBuilder for SpanBuilder {
    type Element = Span;
    type Output = Vec<Span>;

    fn add_text(&mut self, text: &str) {
        self.pending.push_str(text);
    }

    fn add_element(&mut self, element: Span) {
        self.flush();
        push_span(&mut self.spans, element);
    }

    fn result(mut self) -> Vec<Span> {
        self.flush();
        self.spans
    }
}

/// Collects highlighted code. Plain text gets `category`, which is `None`
/// for the outer code of a highlighter.
#[derive(Debug, Default)]
pub struct CodeSpanBuilder {
    category: Option<CodeCategory>,
    pending: String,
    spans: Vec<CodeSpan>,
}

impl CodeSpanBuilder {
    pub fn new(category: Option<CodeCategory>) -> Self {
        Self {
            category,
            ..Self::default()
        }
    }

    fn flush(&mut self) {
        if !self.pending.is_empty() {
            let content = std::mem::take(&mut self.pending);
            push_code_span(
                &mut self.spans,
                CodeSpan {
                    content,
                    category: self.category,
                },
            );
        }
    }
}

impl ResultBuilder for CodeSpanBuilder {
    type Element = Vec<CodeSpan>;
    type Output = Vec<CodeSpan>;

    fn add_text(&mut self, text: &str) {
        self.pending.push_str(text);
    }

    fn add_element(&mut self, element: Vec<CodeSpan>) {
        self.flush();
        for span in element {
            push_code_span(&mut self.spans, span);
        }
    }

    fn result(mut self) -> Vec<CodeSpan> {
        self.flush();
        self.spans
    }
}
