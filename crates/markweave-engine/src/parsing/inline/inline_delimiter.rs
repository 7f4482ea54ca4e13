use crate::parsing::combinator::{CharSet, ParseResult, SourceCursor};

use super::delimiter::{Delimiter, DelimiterResult, TextDelimiter, text_before};

/// What the combined delimiter of an inline scan found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineResult {
    /// A char that may start a nested span; the cursor is left on it.
    NestedDelimiter { start_char: char, text: String },
    /// The end of the enclosing span.
    EndDelimiter(String),
}

/// Watches for the end of a span and the start of nested spans at once.
///
/// The end condition is checked first, so a char that could both close the
/// current span and open a nested one closes.
pub struct InlineDelimiter<'a> {
    end: &'a TextDelimiter,
    nested: CharSet,
    start_chars: CharSet,
}

impl<'a> InlineDelimiter<'a> {
    pub fn new(end: &'a TextDelimiter, nested: CharSet) -> Self {
        let start_chars = end.start_chars().union(&nested);
        Self {
            end,
            nested,
            start_chars,
        }
    }
}

impl Delimiter<InlineResult> for InlineDelimiter<'_> {
    fn start_chars(&self) -> &CharSet {
        &self.start_chars
    }

    fn at_start_char(
        &self,
        c: char,
        consumed: usize,
        cursor: &SourceCursor,
    ) -> DelimiterResult<InlineResult> {
        if self.end.start_chars().contains(c) {
            match self.end.at_start_char(c, consumed, cursor) {
                DelimiterResult::Complete(result) => {
                    return DelimiterResult::Complete(
                        result.map(|(text, next)| (InlineResult::EndDelimiter(text), next)),
                    );
                }
                DelimiterResult::Continue => {}
            }
        }
        if self.nested.contains(c) {
            let text = text_before(cursor, consumed).to_string();
            return DelimiterResult::Complete(Ok((
                InlineResult::NestedDelimiter {
                    start_char: c,
                    text,
                },
                cursor.clone(),
            )));
        }
        DelimiterResult::Continue
    }

    fn at_eof(&self, consumed: usize, cursor: &SourceCursor) -> ParseResult<InlineResult> {
        self.end
            .at_eof(consumed, cursor)
            .map(|(text, next)| (InlineResult::EndDelimiter(text), next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::inline::delimiter::scan;

    #[test]
    fn end_is_checked_before_nested() {
        let end = TextDelimiter::delimited_by("*");
        let delimiter = InlineDelimiter::new(&end, CharSet::from("*_"));
        let (found, next) = scan(&delimiter, &SourceCursor::new("ab*c")).unwrap();
        assert_eq!(found, InlineResult::EndDelimiter("ab".to_string()));
        assert_eq!(next.remaining(), "c");
    }

    #[test]
    fn nested_start_leaves_cursor_on_char() {
        let end = TextDelimiter::delimited_by("*");
        let delimiter = InlineDelimiter::new(&end, CharSet::from("_"));
        let (found, next) = scan(&delimiter, &SourceCursor::new("ab_c_*")).unwrap();
        assert_eq!(
            found,
            InlineResult::NestedDelimiter {
                start_char: '_',
                text: "ab".to_string()
            }
        );
        assert_eq!(next.remaining(), "_c_*");
    }
}
