use crate::parsing::combinator::{Failure, Position, SourceCursor};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("{message} at {position}")]
    Syntax { message: String, position: Position },
    #[error("no syntax highlighter registered for '{0}'")]
    UnknownLanguage(String),
}

impl ParseError {
    /// Locates `failure` in the `input` it was produced from.
    pub fn from_failure(failure: &Failure, input: &str) -> Self {
        let position = SourceCursor::new(input).consume(failure.offset()).position();
        ParseError::Syntax {
            message: failure.message().to_string(),
            position,
        }
    }
}
