//! The minimal parser-combinator toolkit the engine is expressed in.

mod charset;
mod cursor;
mod failure;
mod parser;
mod prefixed;
pub mod text;

pub use charset::CharSet;
pub use cursor::{Attempt, Position, SourceCursor};
pub use failure::{Failure, ParseResult};
pub use parser::{Parser, failure, first_of, success};
pub use prefixed::PrefixedParser;
