//! Single-pass inline scanning.
//!
//! A run of inline content is scanned once, left to right. The scanner only
//! stops at chars that may end the current span or start a nested one.
//! Failed nested attempts are recorded on the cursor, so an enclosing scan
//! never repeats one at the same position and nest level. Unclosed markers
//! therefore cost at most one rescan per position and level instead of
//! compounding with every level of nesting.

mod builder;
mod delimiter;
mod inline_delimiter;
mod parser;
mod table;

pub use builder::{CodeSpanBuilder, ResultBuilder, SpanBuilder, TextBuilder};
pub use delimiter::{DelimitedText, Delimiter, DelimiterResult, TextDelimiter, scan};
pub use inline_delimiter::{InlineDelimiter, InlineResult};
pub use parser::{DeferredTable, InlineParser, code_spans, spans, text};
pub use table::NestedTable;
