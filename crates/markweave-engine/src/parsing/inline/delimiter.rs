use std::sync::Arc;

use crate::parsing::combinator::{
    CharSet, Failure, ParseResult, Parser, PrefixedParser, SourceCursor,
};

/// What a delimiter decides when the scanner stops at one of its chars.
pub enum DelimiterResult<T> {
    /// Not a delimiter here; keep scanning.
    Continue,
    /// The scan ends with this result.
    Complete(ParseResult<T>),
}

/// Detects the end of a run of text during a single left-to-right scan.
///
/// The scanner only consults the delimiter at chars in [`start_chars`], so
/// the delimiter never sees ordinary text. `consumed` is the number of bytes
/// scanned so far, which is the text preceding `cursor`.
///
/// [`start_chars`]: Delimiter::start_chars
pub trait Delimiter<T>: Send + Sync {
    fn start_chars(&self) -> &CharSet;

    fn at_start_char(&self, c: char, consumed: usize, cursor: &SourceCursor)
    -> DelimiterResult<T>;

    fn at_eof(&self, consumed: usize, cursor: &SourceCursor) -> ParseResult<T>;
}

/// The `consumed` bytes preceding `cursor`.
pub(crate) fn text_before(cursor: &SourceCursor, consumed: usize) -> &str {
    let end = cursor.offset();
    &cursor.input()[end - consumed..end]
}

/// Scans from `cursor` until `delimiter` completes or input ends.
///
/// Every char is visited at most once.
pub fn scan<T, D>(delimiter: &D, cursor: &SourceCursor) -> ParseResult<T>
where
    D: Delimiter<T> + ?Sized,
{
    let rest = cursor.remaining();
    let start_chars = delimiter.start_chars();
    for (i, c) in rest.char_indices() {
        if start_chars.contains(c) {
            let at = cursor.consume(i);
            if let DelimiterResult::Complete(result) = delimiter.at_start_char(c, i, &at) {
                return result;
            }
        }
    }
    delimiter.at_eof(rest.len(), &cursor.consume(rest.len()))
}

/// How a [`TextDelimiter`] recognizes its end.
#[derive(Clone)]
enum EndCondition {
    None,
    Literal(String),
    Chars(CharSet),
    Parser(PrefixedParser<()>),
}

/// A delimiter producing the plain text before its end condition.
#[derive(Clone)]
pub struct TextDelimiter {
    end: EndCondition,
    start_chars: CharSet,
    fail_on: CharSet,
    non_empty: bool,
    accept_eof: bool,
    keep_delimiter: bool,
    prev_not: CharSet,
    next_not: CharSet,
}

impl TextDelimiter {
    fn with_end(end: EndCondition, start_chars: CharSet) -> Self {
        Self {
            end,
            start_chars,
            fail_on: CharSet::empty(),
            non_empty: false,
            accept_eof: false,
            keep_delimiter: false,
            prev_not: CharSet::empty(),
            next_not: CharSet::empty(),
        }
    }

    /// Text ending at the literal `end`.
    pub fn delimited_by(end: &str) -> Self {
        let start = end.chars().take(1).collect();
        Self::with_end(EndCondition::Literal(end.to_string()), start)
    }

    /// Text ending at any single char of `chars`.
    pub fn delimited_by_chars(chars: impl Into<CharSet>) -> Self {
        let chars = chars.into();
        Self::with_end(EndCondition::Chars(chars.clone()), chars)
    }

    /// Text ending where `end` succeeds. Only probed at `end`'s start chars.
    pub fn delimited_by_parser(end: PrefixedParser<()>) -> Self {
        let start = end.start_chars().clone();
        Self::with_end(EndCondition::Parser(end), start)
    }

    /// Text running to the end of input.
    pub fn until_eof() -> Self {
        Self::with_end(EndCondition::None, CharSet::empty()).accept_eof()
    }

    /// Fails instead of producing empty text.
    pub fn non_empty(mut self) -> Self {
        self.non_empty = true;
        self
    }

    /// Fails when any of `chars` is reached before the end.
    pub fn fail_on(mut self, chars: impl Into<CharSet>) -> Self {
        self.fail_on = self.fail_on.union(&chars.into());
        self.start_chars = self.start_chars.union(&self.fail_on);
        self
    }

    /// Reaching the end of input completes the text instead of failing.
    pub fn accept_eof(mut self) -> Self {
        self.accept_eof = true;
        self
    }

    /// Leaves the cursor before the delimiter instead of after it.
    pub fn keep_delimiter(mut self) -> Self {
        self.keep_delimiter = true;
        self
    }

    /// The delimiter only counts when not preceded by one of `chars`.
    pub fn prev_not(mut self, chars: impl Into<CharSet>) -> Self {
        self.prev_not = chars.into();
        self
    }

    /// The delimiter only counts when not followed by one of `chars`.
    pub fn next_not(mut self, chars: impl Into<CharSet>) -> Self {
        self.next_not = chars.into();
        self
    }

    pub(crate) fn is_non_empty(&self) -> bool {
        self.non_empty
    }

    /// A copy that accepts empty text; callers enforce emptiness themselves.
    pub(crate) fn allowing_empty(&self) -> Self {
        Self {
            non_empty: false,
            ..self.clone()
        }
    }

    /// Byte length of the end delimiter at `cursor`, if it matches there.
    fn end_length(&self, c: char, cursor: &SourceCursor) -> Option<usize> {
        let len = match &self.end {
            EndCondition::None => return None,
            EndCondition::Literal(s) => cursor.starts_with(s).then_some(s.len())?,
            EndCondition::Chars(chars) => chars.contains(c).then_some(c.len_utf8())?,
            EndCondition::Parser(p) => {
                if !p.start_chars().contains(c) {
                    return None;
                }
                let (_, next) = p.parse(cursor).ok()?;
                next.offset() - cursor.offset()
            }
        };
        if cursor.previous_char().is_some_and(|p| self.prev_not.contains(p)) {
            return None;
        }
        let after = cursor.consume(len);
        if after.char().is_some_and(|n| self.next_not.contains(n)) {
            return None;
        }
        Some(len)
    }

    pub fn into_parser(self) -> Parser<String> {
        DelimitedText::new(self).into_parser()
    }
}

impl Delimiter<String> for TextDelimiter {
    fn start_chars(&self) -> &CharSet {
        &self.start_chars
    }

    fn at_start_char(
        &self,
        c: char,
        consumed: usize,
        cursor: &SourceCursor,
    ) -> DelimiterResult<String> {
        if let Some(len) = self.end_length(c, cursor) {
            if self.non_empty && consumed == 0 {
                return DelimiterResult::Complete(Err(Failure::new(
                    "expected non-empty text",
                    cursor,
                )));
            }
            let text = text_before(cursor, consumed).to_string();
            let next = if self.keep_delimiter {
                cursor.clone()
            } else {
                cursor.consume(len)
            };
            return DelimiterResult::Complete(Ok((text, next)));
        }
        if self.fail_on.contains(c) {
            return DelimiterResult::Complete(Err(Failure::new(
                format!("unexpected '{}'", c.escape_default()),
                cursor,
            )));
        }
        DelimiterResult::Continue
    }

    fn at_eof(&self, consumed: usize, cursor: &SourceCursor) -> ParseResult<String> {
        if !self.accept_eof {
            return Err(Failure::new("unexpected end of input", cursor));
        }
        if self.non_empty && consumed == 0 {
            return Err(Failure::new("expected non-empty text", cursor));
        }
        Ok((text_before(cursor, consumed).to_string(), cursor.clone()))
    }
}

/// A parser scanning text with a delimiter in one pass.
pub struct DelimitedText<T> {
    delimiter: Arc<dyn Delimiter<T>>,
}

impl<T: 'static> DelimitedText<T> {
    pub fn new(delimiter: impl Delimiter<T> + 'static) -> Self {
        Self {
            delimiter: Arc::new(delimiter),
        }
    }

    pub fn parse(&self, cursor: &SourceCursor) -> ParseResult<T> {
        scan(self.delimiter.as_ref(), cursor)
    }

    pub fn into_parser(self) -> Parser<T> {
        Parser::new(move |cursor| self.parse(cursor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::combinator::text::literal;
    use pretty_assertions::assert_eq;

    fn run(delimiter: TextDelimiter, input: &str) -> Result<(String, String), Failure> {
        delimiter
            .into_parser()
            .parse(&SourceCursor::new(input))
            .map(|(text, next)| (text, next.remaining().to_string()))
    }

    #[test]
    fn literal_end_is_consumed() {
        assert_eq!(
            run(TextDelimiter::delimited_by("**"), "bold** rest"),
            Ok(("bold".to_string(), " rest".to_string()))
        );
    }

    #[test]
    fn keep_delimiter_leaves_cursor_before_end() {
        assert_eq!(
            run(TextDelimiter::delimited_by_chars("\n").keep_delimiter(), "line\nnext"),
            Ok(("line".to_string(), "\nnext".to_string()))
        );
    }

    #[test]
    fn missing_end_fails_unless_eof_accepted() {
        assert!(run(TextDelimiter::delimited_by("`"), "open").is_err());
        assert_eq!(
            run(TextDelimiter::delimited_by("`").accept_eof(), "open"),
            Ok(("open".to_string(), String::new()))
        );
    }

    #[test]
    fn non_empty_rejects_immediate_end() {
        assert!(run(TextDelimiter::delimited_by("]").non_empty(), "]x").is_err());
    }

    #[test]
    fn fail_on_stops_the_scan() {
        assert!(run(TextDelimiter::delimited_by("]").fail_on("\n"), "ab\n]").is_err());
    }

    #[test]
    fn end_match_wins_over_fail_on() {
        assert_eq!(
            run(TextDelimiter::delimited_by_chars("\n").fail_on("\n"), "ab\n"),
            Ok(("ab".to_string(), String::new()))
        );
    }

    #[test]
    fn prev_not_skips_delimiter_after_whitespace() {
        assert_eq!(
            run(TextDelimiter::delimited_by("*").prev_not(" "), "a * b*"),
            Ok(("a * b".to_string(), String::new()))
        );
    }

    #[test]
    fn next_not_skips_doubled_delimiter() {
        assert_eq!(
            run(
                TextDelimiter::delimited_by("*").prev_not("*").next_not("*"),
                "a**b*c"
            ),
            Ok(("a**b".to_string(), "c".to_string()))
        );
    }

    #[test]
    fn parser_end_condition() {
        let end = literal("-->").void();
        assert_eq!(
            run(TextDelimiter::delimited_by_parser(end), "x - y-->z"),
            Ok(("x - y".to_string(), "z".to_string()))
        );
    }

    #[test]
    fn until_eof_takes_everything() {
        assert_eq!(
            run(TextDelimiter::until_eof(), "all of it"),
            Ok(("all of it".to_string(), String::new()))
        );
    }
}
