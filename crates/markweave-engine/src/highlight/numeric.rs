use std::sync::OnceLock;

use regex::Regex;

use crate::ast::{CodeCategory, CodeSpan};
use crate::parsing::combinator::text::regex;
use crate::parsing::combinator::{CharSet, Failure, Parser, PrefixedParser, SourceCursor};

use super::CodeSpanParser;
use super::keywords::is_identifier_char;

const NUMBER: &str = r"^(?:0[xX][0-9a-fA-F_]+|0[bB][01_]+|0[oO][0-7_]+|[0-9][0-9_]*(?:\.[0-9][0-9_]*)?(?:[eE][+-]?[0-9_]+)?)";

fn number_regex(with_suffix: bool) -> &'static Regex {
    static PLAIN: OnceLock<Regex> = OnceLock::new();
    static SUFFIXED: OnceLock<Regex> = OnceLock::new();
    if with_suffix {
        SUFFIXED.get_or_init(|| {
            Regex::new(&format!("{NUMBER}(?:[iu](?:8|16|32|64|128|size)|f32|f64)?"))
                .expect("Invalid number regex")
        })
    } else {
        PLAIN.get_or_init(|| Regex::new(NUMBER).expect("Invalid number regex"))
    }
}

/// Decimal integers and floats plus hex, binary and octal integers.
/// With `with_suffix`, type suffixes like `u8` or `f64` are included.
pub fn number_literal(with_suffix: bool) -> CodeSpanParser {
    let number = regex(number_regex(with_suffix));
    let parser = Parser::new(move |cursor: &SourceCursor| {
        if cursor.previous_char().is_some_and(is_identifier_char) {
            return Err(Failure::new("number inside identifier", cursor));
        }
        let (text, next) = number.parse(cursor)?;
        Ok((vec![CodeSpan::new(text, CodeCategory::NumberLiteral)], next))
    });
    PrefixedParser::new(CharSet::range('0'..='9'), parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("42")]
    #[case("3.14")]
    #[case("1e-9")]
    #[case("0xFF")]
    #[case("0b1010")]
    #[case("1_000")]
    fn numbers(#[case] input: &str) {
        assert_eq!(
            number_literal(false).into_parser().parse_all(input),
            Ok(vec![CodeSpan::new(input, CodeCategory::NumberLiteral)])
        );
    }

    #[test]
    fn suffix_is_optional_part_of_the_literal() {
        let p = number_literal(true).into_parser();
        assert!(p.parse_all("255u8").is_ok());
        assert!(number_literal(false).into_parser().parse_all("255u8").is_err());
    }

    #[test]
    fn digits_inside_identifiers_are_not_numbers() {
        let cursor = SourceCursor::new("x1").consume(1);
        assert!(number_literal(false).parse(&cursor).is_err());
    }
}
