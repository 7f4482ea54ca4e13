//! The document tree produced by parsing.

mod block;
mod code;
mod document;
mod message;
mod span;

pub use block::Block;
pub use code::{CodeCategory, CodeSpan, push_code_span};
pub use document::{InvalidDocument, RootElement};
pub use message::{Invalid, MessageLevel, RuntimeMessage, UnknownMessageLevel};
pub use span::{Span, push_span};
