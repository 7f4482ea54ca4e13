use super::cursor::SourceCursor;

/// A structural parse failure: the attempted construct does not match here.
///
/// Failures are cheap values; callers backtrack by simply trying the next
/// alternative with the cursor they already hold.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} (offset {offset})")]
pub struct Failure {
    message: String,
    offset: usize,
}

impl Failure {
    pub fn new(message: impl Into<String>, cursor: &SourceCursor) -> Self {
        Self {
            message: message.into(),
            offset: cursor.offset(),
        }
    }

    /// Keeps the offset, replaces the message.
    pub fn with_message(self, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            offset: self.offset,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Byte offset into the input the failing parser was applied to.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

/// The outcome of applying a parser: the result plus the cursor after it.
pub type ParseResult<T> = Result<(T, SourceCursor), Failure>;
