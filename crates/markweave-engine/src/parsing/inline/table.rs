use std::collections::HashMap;

use crate::parsing::combinator::{CharSet, Parser, PrefixedParser, first_of};

/// Char-indexed parsers for nested spans.
///
/// Built once from an ordered list of prefixed parsers; parsers registered
/// for the same char form one alternation in registration order.
pub struct NestedTable<E> {
    start_chars: CharSet,
    parsers: HashMap<char, Parser<E>>,
}

impl<E: 'static> NestedTable<E> {
    pub fn new(parsers: impl IntoIterator<Item = PrefixedParser<E>>) -> Self {
        let mut buckets: HashMap<char, Vec<Parser<E>>> = HashMap::new();
        let mut start_chars = CharSet::empty();
        for parser in parsers {
            for c in parser.start_chars().iter() {
                start_chars.insert(c);
                buckets.entry(c).or_default().push(parser.parser().clone());
            }
        }
        let parsers = buckets
            .into_iter()
            .map(|(c, bucket)| (c, first_of(bucket)))
            .collect();
        Self {
            start_chars,
            parsers,
        }
    }

    pub fn start_chars(&self) -> &CharSet {
        &self.start_chars
    }

    pub fn get(&self, c: char) -> Option<&Parser<E>> {
        self.parsers.get(&c)
    }

    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::combinator::text::literal;

    #[test]
    fn same_char_registrations_keep_order() {
        let table = NestedTable::new(vec![
            literal("**").map(|_| "strong"),
            literal("*").map(|_| "emphasis"),
        ]);
        let parser = table.get('*').unwrap();
        assert_eq!(parser.parse_all("**"), Ok("strong"));
        assert_eq!(parser.parse_all("*"), Ok("emphasis"));
        assert!(table.get('_').is_none());
    }
}
