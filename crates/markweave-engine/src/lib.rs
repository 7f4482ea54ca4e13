//! An extensible markup parsing engine.
//!
//! A host [`markdown::Markdown`] grammar plus optional
//! [extension bundles](parsing::ExtensionBundle) are assembled once into a
//! [`RootParser`], which turns text into a [`RootElement`] tree and can be
//! shared freely between threads.

pub mod ast;
pub mod extensions;
pub mod highlight;
pub mod markdown;
pub mod parsing;
pub mod tree;

pub use ast::{Block, CodeCategory, CodeSpan, Invalid, MessageLevel, RootElement, Span};
pub use markdown::Markdown;
pub use parsing::{ExtensionBundle, MarkupFormat, ParseError, RootParser};
pub use tree::format_tree;
