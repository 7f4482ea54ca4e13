use crate::highlight::SyntaxHighlighter;
use crate::parsing::builders::{BlockParserBuilder, SpanParserBuilder};

/// Additional parsers layered on top of a host format.
///
/// Bundle parsers are ordered around the host's: High precedence bundle
/// parsers run before the host's, Low precedence ones after.
pub trait ExtensionBundle: Send + Sync {
    fn name(&self) -> &str;

    fn block_parsers(&self) -> Vec<BlockParserBuilder> {
        Vec::new()
    }

    fn span_parsers(&self) -> Vec<SpanParserBuilder> {
        Vec::new()
    }

    fn syntax_highlighters(&self) -> Vec<SyntaxHighlighter> {
        Vec::new()
    }
}
