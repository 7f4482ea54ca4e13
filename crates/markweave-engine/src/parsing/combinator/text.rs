//! Character-level primitives.
//!
//! Every parser here works on the remaining input of a [`SourceCursor`] and
//! consumes whole chars only. Parsers whose first char is known up front
//! return a [`PrefixedParser`] so they can take part in start-char dispatch.

use std::sync::Arc;

use regex::Regex;

use super::charset::CharSet;
use super::cursor::SourceCursor;
use super::failure::Failure;
use super::parser::Parser;
use super::prefixed::PrefixedParser;

/// Matches the exact string `expected`.
pub fn literal(expected: &str) -> PrefixedParser<String> {
    let expected = expected.to_string();
    let start: CharSet = expected.chars().take(1).collect();
    let parser = Parser::new(move |cursor: &SourceCursor| {
        if cursor.starts_with(&expected) {
            Ok((expected.clone(), cursor.consume(expected.len())))
        } else {
            Err(Failure::new(format!("expected '{expected}'"), cursor))
        }
    });
    PrefixedParser::new(start, parser)
}

/// Matches a single char from `chars`.
pub fn one_of(chars: impl Into<CharSet>) -> PrefixedParser<char> {
    let chars = chars.into();
    let start = chars.clone();
    let parser = Parser::new(move |cursor: &SourceCursor| match cursor.char() {
        Some(c) if chars.contains(c) => Ok((c, cursor.consume_char())),
        _ => Err(Failure::new(format!("expected one of {chars:?}"), cursor)),
    });
    PrefixedParser::new(start, parser)
}

/// Matches any single char.
pub fn one_char() -> Parser<char> {
    one_if(|_| true)
}

/// Matches a single char satisfying `predicate`.
pub fn one_if<F>(predicate: F) -> Parser<char>
where
    F: Fn(char) -> bool + Send + Sync + 'static,
{
    Parser::new(move |cursor: &SourceCursor| match cursor.char() {
        Some(c) if predicate(c) => Ok((c, cursor.consume_char())),
        Some(_) => Err(Failure::new("unexpected character", cursor)),
        None => Err(Failure::new("unexpected end of input", cursor)),
    })
}

/// Consumes chars while `predicate` holds; always succeeds.
pub fn chars_while<F>(predicate: F) -> Parser<String>
where
    F: Fn(char) -> bool + Send + Sync + 'static,
{
    Parser::new(move |cursor: &SourceCursor| {
        let rest = cursor.remaining();
        let len = rest
            .char_indices()
            .find(|&(_, c)| !predicate(c))
            .map_or(rest.len(), |(i, _)| i);
        Ok((rest[..len].to_string(), cursor.consume(len)))
    })
}

fn counted<F>(min: usize, predicate: F, expected: String) -> Parser<String>
where
    F: Fn(char) -> bool + Send + Sync + 'static,
{
    let inner = chars_while(predicate);
    Parser::new(move |cursor: &SourceCursor| {
        let (text, next) = inner.parse(cursor)?;
        if text.chars().count() >= min {
            Ok((text, next))
        } else {
            Err(Failure::new(expected.clone(), cursor))
        }
    })
}

/// One or more chars from `chars`.
pub fn some_of(chars: impl Into<CharSet>) -> PrefixedParser<String> {
    let chars = Arc::new(chars.into());
    let expected = format!("expected at least one of {chars:?}");
    let set = Arc::clone(&chars);
    PrefixedParser::new(
        (*chars).clone(),
        counted(1, move |c| set.contains(c), expected),
    )
}

/// Zero or more chars from `chars`.
pub fn any_of(chars: impl Into<CharSet>) -> Parser<String> {
    let chars = chars.into();
    chars_while(move |c| chars.contains(c))
}

/// Zero or more chars not in `chars`.
pub fn any_not(chars: impl Into<CharSet>) -> Parser<String> {
    let chars = chars.into();
    chars_while(move |c| !chars.contains(c))
}

/// One or more chars not in `chars`.
pub fn some_not(chars: impl Into<CharSet>) -> Parser<String> {
    let chars = chars.into();
    let expected = format!("expected a character outside {chars:?}");
    counted(1, move |c| !chars.contains(c), expected)
}

/// Zero or more spaces or tabs.
pub fn ws() -> Parser<String> {
    any_of([' ', '\t'])
}

/// The text up to the next newline, which is consumed but not returned.
///
/// Fails at the end of input so repetitions of it always terminate.
pub fn rest_of_line() -> Parser<String> {
    Parser::new(|cursor: &SourceCursor| {
        if cursor.at_end() {
            return Err(Failure::new("unexpected end of input", cursor));
        }
        let rest = cursor.remaining();
        match rest.find('\n') {
            Some(i) => Ok((rest[..i].to_string(), cursor.consume(i + 1))),
            None => Ok((rest.to_string(), cursor.consume(rest.len()))),
        }
    })
}

/// A line containing only spaces or tabs, including its newline.
pub fn blank_line() -> Parser<()> {
    rest_of_line().try_map(|line| {
        if line.trim_matches([' ', '\t']).is_empty() {
            Ok(())
        } else {
            Err("expected blank line".to_string())
        }
    })
}

/// Zero or more blank lines.
pub fn blank_lines() -> Parser<()> {
    blank_line().rep().void()
}

pub fn eof() -> Parser<()> {
    Parser::new(|cursor: &SourceCursor| {
        if cursor.at_end() {
            Ok(((), cursor.clone()))
        } else {
            Err(Failure::new("expected end of input", cursor))
        }
    })
}

/// Matches `pattern` at the current position only.
///
/// Patterns should be anchored with `^`; a match starting later in the
/// input is treated as a failure.
pub fn regex(pattern: &Regex) -> Parser<String> {
    let pattern = pattern.clone();
    Parser::new(move |cursor: &SourceCursor| match pattern.find(cursor.remaining()) {
        Some(m) if m.start() == 0 && !m.is_empty() => {
            Ok((m.as_str().to_string(), cursor.consume(m.end())))
        }
        _ => Err(Failure::new(
            format!("expected match for /{}/", pattern.as_str()),
            cursor,
        )),
    })
}
