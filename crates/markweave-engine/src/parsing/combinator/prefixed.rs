use super::charset::CharSet;
use super::cursor::SourceCursor;
use super::failure::ParseResult;
use super::parser::{Parser, first_of};

/// A parser that knows the set of chars it can possibly start with.
///
/// The start chars are static metadata used for dispatch; they do not
/// change what the wrapped parser accepts. An empty set marks the parser as
/// unprefixed.
#[derive(Debug)]
pub struct PrefixedParser<T> {
    start_chars: CharSet,
    parser: Parser<T>,
}

impl<T> Clone for PrefixedParser<T> {
    fn clone(&self) -> Self {
        Self {
            start_chars: self.start_chars.clone(),
            parser: self.parser.clone(),
        }
    }
}

impl<T: 'static> PrefixedParser<T> {
    pub fn new(start_chars: impl Into<CharSet>, parser: Parser<T>) -> Self {
        Self {
            start_chars: start_chars.into(),
            parser,
        }
    }

    pub fn unprefixed(parser: Parser<T>) -> Self {
        Self::new(CharSet::empty(), parser)
    }

    pub fn start_chars(&self) -> &CharSet {
        &self.start_chars
    }

    pub fn is_unprefixed(&self) -> bool {
        self.start_chars.is_empty()
    }

    pub fn parser(&self) -> &Parser<T> {
        &self.parser
    }

    pub fn into_parser(self) -> Parser<T> {
        self.parser
    }

    pub fn parse(&self, cursor: &SourceCursor) -> ParseResult<T> {
        self.parser.parse(cursor)
    }

    pub fn map<U, F>(self, f: F) -> PrefixedParser<U>
    where
        U: 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        PrefixedParser::new(self.start_chars, self.parser.map(f))
    }

    pub fn then<U: 'static>(self, other: Parser<U>) -> PrefixedParser<(T, U)> {
        PrefixedParser::new(self.start_chars, self.parser.then(other))
    }

    pub fn skip_then<U: 'static>(self, other: Parser<U>) -> PrefixedParser<U> {
        PrefixedParser::new(self.start_chars, self.parser.skip_then(other))
    }

    pub fn then_skip<U: 'static>(self, other: Parser<U>) -> PrefixedParser<T> {
        PrefixedParser::new(self.start_chars, self.parser.then_skip(other))
    }

    pub fn source(self) -> PrefixedParser<String> {
        PrefixedParser::new(self.start_chars, self.parser.source())
    }

    pub fn void(self) -> PrefixedParser<()> {
        PrefixedParser::new(self.start_chars, self.parser.void())
    }

    pub fn with_message(self, message: impl Into<String>) -> PrefixedParser<T> {
        PrefixedParser::new(self.start_chars, self.parser.with_message(message))
    }

    /// Alternation whose start chars are the union of both sides.
    pub fn or(self, other: PrefixedParser<T>) -> PrefixedParser<T> {
        PrefixedParser::new(
            self.start_chars.union(&other.start_chars),
            first_of(vec![self.parser, other.parser]),
        )
    }
}

impl<T: 'static> From<Parser<T>> for PrefixedParser<T> {
    fn from(parser: Parser<T>) -> Self {
        PrefixedParser::unprefixed(parser)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::combinator::text::literal;

    #[test]
    fn or_unions_start_chars() {
        let p = literal("*").or(literal("_"));
        assert!(p.start_chars().contains('*'));
        assert!(p.start_chars().contains('_'));
        assert_eq!(p.parser().parse_all("_"), Ok("_".to_string()));
    }

    #[test]
    fn plain_parser_converts_to_unprefixed() {
        let p: PrefixedParser<String> = literal("x").into_parser().into();
        assert!(p.is_unprefixed());
    }
}
