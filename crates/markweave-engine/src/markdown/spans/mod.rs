//! Markdown span parsers.

mod code_span;
mod emphasis;
mod link;

pub use code_span::InlineCode;
pub use emphasis::Emphasis;
pub use link::Link;
