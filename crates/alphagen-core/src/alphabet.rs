//! The [`Alphabet`] value type.
//!
//! An alphabet is the ordered set of distinct characters used in some text,
//! with the whitespace control characters `\r`, `\n` and `\t` left out.
//! Members are kept in a [`BTreeSet`], so iteration is always ascending by
//! code value and no separate sort pass is needed.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Serialize, Serializer};

/// Characters that never appear in an alphabet.
pub const EXCLUDED_CHARS: [char; 3] = ['\r', '\n', '\t'];

/// Returns `true` if `ch` is dropped from every alphabet.
#[inline]
pub fn is_excluded(ch: char) -> bool {
    EXCLUDED_CHARS.contains(&ch)
}

/// Distinct characters of a text, ascending by code value.
///
/// Invariant: never contains a member of [`EXCLUDED_CHARS`].
///
/// ```
/// use alphagen_core::Alphabet;
///
/// let alphabet = Alphabet::from_text("hello\nworld");
/// assert_eq!(alphabet.to_string(), "dehlorw");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Alphabet {
    chars: BTreeSet<char>,
}

impl Alphabet {
    /// Creates an empty alphabet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects the alphabet of `text`.
    pub fn from_text(text: &str) -> Self {
        let mut alphabet = Self::new();
        alphabet.extend_from_text(text);
        alphabet
    }

    /// Adds every qualifying character of `text`.
    pub fn extend_from_text(&mut self, text: &str) {
        self.extend(text.chars());
    }

    /// Inserts a single character.
    ///
    /// Returns `true` if the character was newly added. Excluded characters
    /// are ignored and always return `false`.
    pub fn insert(&mut self, ch: char) -> bool {
        if is_excluded(ch) {
            return false;
        }
        self.chars.insert(ch)
    }

    /// Adds all members of `other` to this alphabet.
    pub fn merge(&mut self, other: &Alphabet) {
        self.chars.extend(other.chars.iter().copied());
    }

    /// Returns the union of two alphabets.
    pub fn union(&self, other: &Alphabet) -> Alphabet {
        Self {
            chars: self.chars.union(&other.chars).copied().collect(),
        }
    }

    /// Returns `true` if `ch` is a member.
    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }

    /// Number of distinct characters.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns `true` if the alphabet has no members.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Iterates members in ascending order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = char> + ExactSizeIterator + '_ {
        self.chars.iter().copied()
    }

    /// Concatenates the members into a string, no separators.
    pub fn render(&self) -> String {
        self.chars.iter().collect()
    }
}

impl Extend<char> for Alphabet {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        for ch in iter {
            self.insert(ch);
        }
    }
}

impl FromIterator<char> for Alphabet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut alphabet = Self::new();
        alphabet.extend(iter);
        alphabet
    }
}

impl<'a> FromIterator<&'a Alphabet> for Alphabet {
    fn from_iter<I: IntoIterator<Item = &'a Alphabet>>(iter: I) -> Self {
        let mut alphabet = Self::new();
        for other in iter {
            alphabet.merge(other);
        }
        alphabet
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;
        self.chars.iter().try_for_each(|&ch| f.write_char(ch))
    }
}

impl Serialize for Alphabet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_reports_new_members() {
        let mut alphabet = Alphabet::new();
        assert!(alphabet.insert('b'));
        assert!(alphabet.insert('a'));
        assert!(!alphabet.insert('a'));
        assert_eq!(alphabet.len(), 2);
    }

    #[test]
    fn test_insert_ignores_excluded() {
        let mut alphabet = Alphabet::new();
        for ch in EXCLUDED_CHARS {
            assert!(!alphabet.insert(ch));
        }
        assert!(alphabet.is_empty());
    }

    #[test]
    fn test_iter_is_ascending() {
        let alphabet = Alphabet::from_text("zyx cba");
        let chars: Vec<char> = alphabet.iter().collect();
        assert_eq!(chars, vec![' ', 'a', 'b', 'c', 'x', 'y', 'z']);
        assert!(chars.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_merge_and_union_agree() {
        let left = Alphabet::from_text("hello");
        let right = Alphabet::from_text("world");

        let mut merged = left.clone();
        merged.merge(&right);

        assert_eq!(merged, left.union(&right));
        assert_eq!(merged, Alphabet::from_text("helloworld"));
    }

    #[test]
    fn test_collect_from_alphabets() {
        let parts = [Alphabet::from_text("ab"), Alphabet::from_text("bc\t")];
        let all: Alphabet = parts.iter().collect();
        assert_eq!(all.render(), "abc");
    }

    #[test]
    fn test_display_matches_render() {
        let alphabet = Alphabet::from_text("Zz Aa");
        assert_eq!(alphabet.to_string(), alphabet.render());
        assert_eq!(alphabet.render(), " AZaz");
    }

    #[test]
    fn test_serialize_as_string() {
        let alphabet = Alphabet::from_text("cab");
        let json = serde_json::to_string(&alphabet).unwrap();
        assert_eq!(json, r#""abc""#);
    }
}
