use std::fmt;
use std::sync::Arc;

use super::charset::CharSet;
use super::cursor::SourceCursor;
use super::failure::{Failure, ParseResult};
use super::prefixed::PrefixedParser;

type ParseFn<T> = dyn Fn(&SourceCursor) -> ParseResult<T> + Send + Sync;

/// A parser producing values of type `T`.
///
/// Parsers are immutable, cheaply cloneable handles around a shared closure,
/// so a fully assembled grammar can be used from several threads at once.
/// Composition uses named methods (`then`, `or`, `map`, ...) rather than
/// operator overloading.
pub struct Parser<T> {
    run: Arc<ParseFn<T>>,
}

impl<T> Clone for Parser<T> {
    fn clone(&self) -> Self {
        Self {
            run: Arc::clone(&self.run),
        }
    }
}

impl<T> fmt::Debug for Parser<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parser<{}>", std::any::type_name::<T>())
    }
}

impl<T: 'static> Parser<T> {
    pub fn new<F>(run: F) -> Self
    where
        F: Fn(&SourceCursor) -> ParseResult<T> + Send + Sync + 'static,
    {
        Self { run: Arc::new(run) }
    }

    pub fn parse(&self, cursor: &SourceCursor) -> ParseResult<T> {
        (self.run)(cursor)
    }

    /// Parses the complete `input`, failing if anything remains unconsumed.
    pub fn parse_all(&self, input: &str) -> Result<T, Failure> {
        let (value, next) = self.parse(&SourceCursor::new(input))?;
        if next.at_end() {
            Ok(value)
        } else {
            Err(Failure::new("unexpected trailing input", &next))
        }
    }

    pub fn map<U, F>(self, f: F) -> Parser<U>
    where
        U: 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        Parser::new(move |cursor| {
            self.parse(cursor)
                .map(|(value, next)| (f(value), next))
        })
    }

    /// Maps the result with a fallible function; an `Err` message becomes a
    /// failure at the position where this parser started.
    pub fn try_map<U, F>(self, f: F) -> Parser<U>
    where
        U: 'static,
        F: Fn(T) -> Result<U, String> + Send + Sync + 'static,
    {
        Parser::new(move |cursor| {
            let (value, next) = self.parse(cursor)?;
            match f(value) {
                Ok(mapped) => Ok((mapped, next)),
                Err(message) => Err(Failure::new(message, cursor)),
            }
        })
    }

    /// Chooses the next parser based on the result of this one.
    pub fn and_then<U, F>(self, f: F) -> Parser<U>
    where
        U: 'static,
        F: Fn(T) -> Parser<U> + Send + Sync + 'static,
    {
        Parser::new(move |cursor| {
            let (value, next) = self.parse(cursor)?;
            f(value).parse(&next)
        })
    }

    /// Left-biased choice: `other` only runs when this parser fails.
    pub fn or(self, other: Parser<T>) -> Parser<T> {
        first_of(vec![self, other])
    }

    pub fn then<U: 'static>(self, other: Parser<U>) -> Parser<(T, U)> {
        Parser::new(move |cursor| {
            let (left, next) = self.parse(cursor)?;
            let (right, next) = other.parse(&next)?;
            Ok(((left, right), next))
        })
    }

    /// Runs both parsers in sequence and keeps the right result.
    pub fn skip_then<U: 'static>(self, other: Parser<U>) -> Parser<U> {
        Parser::new(move |cursor| {
            let (_, next) = self.parse(cursor)?;
            other.parse(&next)
        })
    }

    /// Runs both parsers in sequence and keeps the left result.
    pub fn then_skip<U: 'static>(self, other: Parser<U>) -> Parser<T> {
        Parser::new(move |cursor| {
            let (value, next) = self.parse(cursor)?;
            let (_, next) = other.parse(&next)?;
            Ok((value, next))
        })
    }

    pub fn opt(self) -> Parser<Option<T>> {
        Parser::new(move |cursor| match self.parse(cursor) {
            Ok((value, next)) => Ok((Some(value), next)),
            Err(_) => Ok((None, cursor.clone())),
        })
    }

    /// Zero or more repetitions.
    pub fn rep(self) -> Parser<Vec<T>> {
        self.rep_min(0)
    }

    /// At least `min` repetitions. Repetition stops at the first failure or
    /// at the first success that does not consume input.
    pub fn rep_min(self, min: usize) -> Parser<Vec<T>> {
        Parser::new(move |cursor| {
            let mut values = Vec::new();
            let mut position = cursor.clone();
            let mut last_failure = None;
            loop {
                match self.parse(&position) {
                    Ok((value, next)) => {
                        let progressed = next.offset() > position.offset();
                        values.push(value);
                        position = next;
                        if !progressed {
                            break;
                        }
                    }
                    Err(failure) => {
                        last_failure = Some(failure);
                        break;
                    }
                }
            }
            if values.len() >= min {
                Ok((values, position))
            } else {
                Err(last_failure.unwrap_or_else(|| {
                    Failure::new(format!("expected at least {min} repetitions"), cursor)
                }))
            }
        })
    }

    /// Discards the result and returns the consumed input instead.
    pub fn source(self) -> Parser<String> {
        Parser::new(move |cursor| {
            let (_, next) = self.parse(cursor)?;
            Ok((next.captured_since(cursor).to_string(), next))
        })
    }

    pub fn void(self) -> Parser<()> {
        self.map(|_| ())
    }

    /// Succeeds with this parser's result without consuming any input.
    pub fn lookahead(self) -> Parser<T> {
        Parser::new(move |cursor| {
            let (value, _) = self.parse(cursor)?;
            Ok((value, cursor.clone()))
        })
    }

    /// Replaces the failure message of this parser.
    pub fn with_message(self, message: impl Into<String>) -> Parser<T> {
        let message = message.into();
        Parser::new(move |cursor| {
            self.parse(cursor)
                .map_err(|failure| failure.with_message(message.clone()))
        })
    }

    /// Tags this parser with the chars it can start with.
    pub fn prefixed(self, start_chars: impl Into<CharSet>) -> PrefixedParser<T> {
        PrefixedParser::new(start_chars, self)
    }
}

/// A parser that always succeeds with `value` without consuming input.
pub fn success<T: Clone + Send + Sync + 'static>(value: T) -> Parser<T> {
    Parser::new(move |cursor| Ok((value.clone(), cursor.clone())))
}

/// A parser that always fails with `message`.
pub fn failure<T: 'static>(message: impl Into<String>) -> Parser<T> {
    let message = message.into();
    Parser::new(move |cursor| Err(Failure::new(message.clone(), cursor)))
}

/// Ordered alternation: the first parser that succeeds wins.
///
/// When every alternative fails, the failure of the last one is returned.
pub fn first_of<T: 'static>(mut parsers: Vec<Parser<T>>) -> Parser<T> {
    match parsers.len() {
        0 => failure("no alternatives available"),
        1 => parsers.remove(0),
        _ => Parser::new(move |cursor| {
            let mut last = None;
            for parser in &parsers {
                match parser.parse(cursor) {
                    Ok(result) => return Ok(result),
                    Err(failure) => last = Some(failure),
                }
            }
            Err(last.unwrap_or_else(|| Failure::new("no alternatives available", cursor)))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::combinator::text::{literal, one_char};

    #[test]
    fn map_transforms_result() {
        let p = literal("ab").into_parser().map(|s| s.len());
        assert_eq!(p.parse_all("ab"), Ok(2));
    }

    #[test]
    fn or_is_left_biased() {
        let p = literal("a")
            .into_parser()
            .map(|_| 1)
            .or(one_char().map(|_| 2));
        assert_eq!(p.parse_all("a"), Ok(1));
        assert_eq!(p.parse_all("b"), Ok(2));
    }

    #[test]
    fn then_sequences_and_fails_as_a_whole() {
        let p = literal("a").into_parser().then(literal("b").into_parser());
        assert_eq!(p.parse_all("ab"), Ok(("a".to_string(), "b".to_string())));
        assert!(p.parse_all("ac").is_err());
    }

    #[test]
    fn rep_stops_on_failure() {
        let p = literal("ab").into_parser().rep();
        let (values, next) = p.parse(&SourceCursor::new("ababa")).unwrap();
        assert_eq!(values.len(), 2);
        assert_eq!(next.remaining(), "a");
    }

    #[test]
    fn rep_min_enforces_minimum() {
        let p = literal("x").into_parser().rep_min(2);
        assert!(p.parse_all("x").is_err());
        assert_eq!(p.parse_all("xxx").map(|v| v.len()), Ok(3));
    }

    #[test]
    fn rep_terminates_on_zero_width_success() {
        let p = success(()).rep();
        let (values, next) = p.parse(&SourceCursor::new("abc")).unwrap();
        assert_eq!(values.len(), 1);
        assert_eq!(next.offset(), 0);
    }

    #[test]
    fn source_returns_consumed_text() {
        let p = one_char().rep_min(1).source();
        assert_eq!(p.parse_all("xyz"), Ok("xyz".to_string()));
    }

    #[test]
    fn lookahead_does_not_consume() {
        let p = literal("a").into_parser().lookahead();
        let (_, next) = p.parse(&SourceCursor::new("a")).unwrap();
        assert_eq!(next.offset(), 0);
    }

    #[test]
    fn try_map_failure_reports_start_offset() {
        let p = one_char().try_map(|c| if c == 'x' { Ok(c) } else { Err(format!("not x: {c}")) });
        let err = p.parse(&SourceCursor::new("yz")).unwrap_err();
        assert_eq!(err.message(), "not x: y");
        assert_eq!(err.offset(), 0);
    }

    #[test]
    fn first_of_without_alternatives_fails() {
        let p: Parser<()> = first_of(vec![]);
        assert!(p.parse(&SourceCursor::new("a")).is_err());
    }
}
