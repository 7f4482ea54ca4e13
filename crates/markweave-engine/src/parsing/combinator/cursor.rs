use std::collections::HashSet;
use std::fmt;
use std::sync::{Arc, Mutex};

/// An immutable read position into the input of a single parse run.
///
/// Cursors are cheap to clone: the input is shared, and moving forward
/// produces a new cursor instead of mutating this one. The nesting level
/// travels with the cursor so recursive entry points can bound descent
/// without any shared counter.
#[derive(Clone)]
pub struct SourceCursor {
    /// The complete input of this parse run.
    input: Arc<str>,
    /// Byte offset into `input`; always on a char boundary.
    offset: usize,
    /// Number of recursive descents that led to this cursor.
    nest_level: usize,
    /// Nested attempts that already failed on this input.
    failed: Arc<FailedAttempts>,
}

impl PartialEq for SourceCursor {
    fn eq(&self, other: &Self) -> bool {
        self.offset == other.offset
            && self.nest_level == other.nest_level
            && self.input == other.input
    }
}

impl Eq for SourceCursor {}

impl SourceCursor {
    /// Creates a cursor at the start of `input` with nest level 0.
    pub fn new(input: impl Into<Arc<str>>) -> Self {
        Self::nested(input, 0)
    }

    /// Creates a cursor at the start of `input` for re-parsing captured text
    /// at the given nest level.
    pub fn nested(input: impl Into<Arc<str>>, nest_level: usize) -> Self {
        Self {
            input: input.into(),
            offset: 0,
            nest_level,
            failed: Arc::default(),
        }
    }

    /// The complete input, including text already consumed.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The input from the current offset to the end.
    pub fn remaining(&self) -> &str {
        &self.input[self.offset..]
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn at_end(&self) -> bool {
        self.offset >= self.input.len()
    }

    /// Peeks at the current char without advancing.
    pub fn char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// The char immediately before the current offset, if any.
    pub fn previous_char(&self) -> Option<char> {
        self.input[..self.offset].chars().next_back()
    }

    /// Checks if the remaining input starts with the given pattern.
    pub fn starts_with(&self, pattern: &str) -> bool {
        self.remaining().starts_with(pattern)
    }

    /// Returns a cursor advanced by `bytes`, clamped to the end of input.
    pub fn consume(&self, bytes: usize) -> Self {
        let offset = (self.offset + bytes).min(self.input.len());
        debug_assert!(self.input.is_char_boundary(offset));
        Self {
            input: Arc::clone(&self.input),
            offset,
            nest_level: self.nest_level,
            failed: Arc::clone(&self.failed),
        }
    }

    /// Returns a cursor advanced past the current char (no-op at the end).
    pub fn consume_char(&self) -> Self {
        self.consume(self.char().map_or(0, char::len_utf8))
    }

    /// The text between `start` and this cursor.
    ///
    /// `start` must come from the same input and not lie after `self`.
    pub fn captured_since(&self, start: &SourceCursor) -> &str {
        &self.input[start.offset..self.offset]
    }

    pub fn nest_level(&self) -> usize {
        self.nest_level
    }

    /// Returns the same position with a different nest level.
    pub fn with_nest_level(&self, nest_level: usize) -> Self {
        Self {
            input: Arc::clone(&self.input),
            offset: self.offset,
            nest_level,
            failed: Arc::clone(&self.failed),
        }
    }

    /// Whether `attempt` at this position already failed during this parse.
    pub fn has_failed(&self, attempt: Attempt) -> bool {
        self.failed.contains(&self.key(attempt))
    }

    /// Records that `attempt` at this position failed.
    pub fn record_failure(&self, attempt: Attempt) {
        self.failed.insert(self.key(attempt));
    }

    fn key(&self, attempt: Attempt) -> AttemptKey {
        AttemptKey {
            attempt,
            offset: self.offset,
            nest_level: self.nest_level,
        }
    }

    /// Computes the 1-based line and column of the current offset.
    pub fn position(&self) -> Position {
        let consumed = &self.input[..self.offset];
        let line = consumed.matches('\n').count() + 1;
        let line_start = consumed.rfind('\n').map_or(0, |i| i + 1);
        let column = consumed[line_start..].chars().count() + 1;
        Position { line, column }
    }
}

impl fmt::Debug for SourceCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceCursor")
            .field("offset", &self.offset)
            .field("nest_level", &self.nest_level)
            .field("remaining", &crate::tree::preview(self.remaining(), 24))
            .finish()
    }
}

/// Identifies a nested parse attempt: the scanner that made it and the
/// start char it dispatched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Attempt {
    pub scanner: usize,
    pub start_char: char,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct AttemptKey {
    attempt: Attempt,
    offset: usize,
    nest_level: usize,
}

/// Per-input record of failed nested attempts.
///
/// A nested parser's outcome depends only on the attempt, the offset and
/// the nest level, so a failure never needs to be re-run. Shared by every
/// cursor over the same input and dropped with the last of them.
#[derive(Debug, Default)]
struct FailedAttempts(Mutex<HashSet<AttemptKey>>);

impl FailedAttempts {
    fn contains(&self, key: &AttemptKey) -> bool {
        self.0.lock().is_ok_and(|failed| failed.contains(key))
    }

    fn insert(&self, key: AttemptKey) {
        if let Ok(mut failed) = self.0.lock() {
            failed.insert(key);
        }
    }
}

/// A human-readable source position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}
