use crate::ast::Invalid;
use crate::parsing::combinator::{Parser, PrefixedParser, SourceCursor};

/// Commits to a construct once `prefix` matched.
///
/// A failing `prefix` is an ordinary miss. A failing body is not: `recovery`
/// skips the broken content and the whole committed source becomes an
/// invalid element produced by `wrap`, so parsing continues after it.
pub fn committed<P, T, B, W>(
    prefix: PrefixedParser<P>,
    body: B,
    recovery: Parser<()>,
    wrap: W,
) -> PrefixedParser<T>
where
    P: 'static,
    T: 'static,
    B: Fn(P) -> Parser<T> + Send + Sync + 'static,
    W: Fn(Invalid) -> T + Send + Sync + 'static,
{
    let start_chars = prefix.start_chars().clone();
    let prefix = prefix.into_parser();
    let parser = Parser::new(move |cursor: &SourceCursor| {
        let (value, after_prefix) = prefix.parse(cursor)?;
        match body(value).parse(&after_prefix) {
            Ok(result) => Ok(result),
            Err(failure) => {
                let end = recovery
                    .parse(&after_prefix)
                    .map_or(after_prefix, |(_, next)| next);
                let source = end.captured_since(cursor);
                log::warn!("invalid construct at {}: {}", cursor.position(), failure);
                Ok((wrap(Invalid::error(failure.message(), source)), end))
            }
        }
    });
    PrefixedParser::new(start_chars, parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Span;
    use crate::parsing::combinator::text::{any_not, literal, some_of};

    fn counter() -> PrefixedParser<Span> {
        committed(
            literal("@"),
            |_| some_of('1').into_parser().map(Span::Text),
            any_not(' ').void(),
            Span::Invalid,
        )
    }

    #[test]
    fn body_success_is_passed_through() {
        assert_eq!(counter().parser().parse_all("@11"), Ok(Span::text("11")));
    }

    #[test]
    fn body_failure_becomes_invalid_covering_the_source() {
        let (span, next) = counter().parse(&SourceCursor::new("@xy z")).unwrap();
        match span {
            Span::Invalid(invalid) => assert_eq!(invalid.source, "@xy"),
            other => panic!("expected invalid span, got {other:?}"),
        }
        assert_eq!(next.remaining(), " z");
    }

    #[test]
    fn prefix_failure_is_a_plain_miss() {
        assert!(counter().parse(&SourceCursor::new("11")).is_err());
    }
}
