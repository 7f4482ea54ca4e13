//! Built-in syntax highlighters.

mod javascript;
mod json;
mod rust;

use crate::highlight::SyntaxHighlighter;
use crate::parsing::ExtensionBundle;

pub fn all() -> Vec<SyntaxHighlighter> {
    vec![rust::highlighter(), javascript::highlighter(), json::highlighter()]
}

/// Registers the built-in highlighters for fenced code blocks.
#[derive(Debug, Default, Clone, Copy)]
pub struct HighlightingBundle;

impl ExtensionBundle for HighlightingBundle {
    fn name(&self) -> &str {
        "highlighting"
    }

    fn syntax_highlighters(&self) -> Vec<SyntaxHighlighter> {
        all()
    }
}
