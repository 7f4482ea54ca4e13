use std::collections::BTreeSet;
use std::fmt;
use std::ops::RangeInclusive;

/// A set of characters used for start-char dispatch and delimiter detection.
///
/// ASCII membership is a single bit test; other characters fall back to an
/// ordered set. Iteration yields characters in ascending order.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CharSet {
    ascii: u128,
    other: BTreeSet<char>,
}

impl CharSet {
    /// Creates an empty set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a set from an inclusive character range.
    pub fn range(range: RangeInclusive<char>) -> Self {
        range.collect()
    }

    pub fn insert(&mut self, c: char) {
        if c.is_ascii() {
            self.ascii |= 1u128 << (c as u32);
        } else {
            self.other.insert(c);
        }
    }

    #[inline]
    pub fn contains(&self, c: char) -> bool {
        if c.is_ascii() {
            self.ascii & (1u128 << (c as u32)) != 0
        } else {
            self.other.contains(&c)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ascii == 0 && self.other.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ascii.count_ones() as usize + self.other.len()
    }

    /// Returns a new set containing the characters of both sets.
    #[must_use]
    pub fn union(&self, other: &CharSet) -> CharSet {
        CharSet {
            ascii: self.ascii | other.ascii,
            other: self.other.union(&other.other).copied().collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        let ascii = self.ascii;
        (0u8..128)
            .filter(move |b| ascii & (1u128 << *b) != 0)
            .map(char::from)
            .chain(self.other.iter().copied())
    }
}

impl fmt::Debug for CharSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<char> for CharSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut set = CharSet::empty();
        for c in iter {
            set.insert(c);
        }
        set
    }
}

impl From<char> for CharSet {
    fn from(c: char) -> Self {
        std::iter::once(c).collect()
    }
}

impl<const N: usize> From<[char; N]> for CharSet {
    fn from(chars: [char; N]) -> Self {
        chars.into_iter().collect()
    }
}

impl From<&[char]> for CharSet {
    fn from(chars: &[char]) -> Self {
        chars.iter().copied().collect()
    }
}

impl From<&str> for CharSet {
    fn from(chars: &str) -> Self {
        chars.chars().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_and_unicode_membership() {
        let set = CharSet::from(['*', '_', 'é']);
        assert!(set.contains('*'));
        assert!(set.contains('é'));
        assert!(!set.contains('a'));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn union_merges_both_halves() {
        let a = CharSet::from("ab");
        let b = CharSet::from(['c', 'ü']);
        let u = a.union(&b);
        assert_eq!(u.iter().collect::<String>(), "abcü");
    }

    #[test]
    fn range_is_inclusive() {
        let digits = CharSet::range('0'..='9');
        assert_eq!(digits.len(), 10);
        assert!(digits.contains('9'));
    }

    #[test]
    fn empty_set() {
        let set = CharSet::empty();
        assert!(set.is_empty());
        assert!(!set.contains('\0'));
    }
}
