//! String splitting and ASCII case folding used by the tag parser

use std::collections::{BTreeSet, HashSet};

/// Separator between the segments of a tag
pub const SEPARATOR: char = '.';

/// Anything that can decide whether a character is a delimiter
///
/// Implemented for a single `char`, a string of candidate characters,
/// and explicit collections of characters.
pub trait Delimiters {
    fn is_delimiter(&self, c: char) -> bool;
}

impl Delimiters for char {
    fn is_delimiter(&self, c: char) -> bool {
        *self == c
    }
}

impl Delimiters for &str {
    fn is_delimiter(&self, c: char) -> bool {
        self.contains(c)
    }
}

impl Delimiters for String {
    fn is_delimiter(&self, c: char) -> bool {
        self.contains(c)
    }
}

impl Delimiters for &[char] {
    fn is_delimiter(&self, c: char) -> bool {
        self.contains(&c)
    }
}

impl<const N: usize> Delimiters for [char; N] {
    fn is_delimiter(&self, c: char) -> bool {
        self.contains(&c)
    }
}

impl Delimiters for Vec<char> {
    fn is_delimiter(&self, c: char) -> bool {
        self.contains(&c)
    }
}

impl Delimiters for HashSet<char> {
    fn is_delimiter(&self, c: char) -> bool {
        self.contains(&c)
    }
}

impl Delimiters for BTreeSet<char> {
    fn is_delimiter(&self, c: char) -> bool {
        self.contains(&c)
    }
}

/// Split `text` on any of the given delimiters
///
/// Empty tokens are kept: the empty string yields one empty token, and
/// leading, trailing or consecutive delimiters produce empty tokens in
/// the matching positions.
///
/// # Examples
///
/// ```
/// use tagpath::domain::text::split;
///
/// assert_eq!(split("a..b", '.'), vec!["a", "", "b"]);
/// assert_eq!(split("a.b,c;d", ".,;"), vec!["a", "b", "c", "d"]);
/// ```
pub fn split<D: Delimiters>(text: &str, delimiters: D) -> Vec<&str> {
    text.split(|c: char| delimiters.is_delimiter(c)).collect()
}

/// Lowercase ASCII letters, leaving every other character untouched
pub fn make_lower(text: &str) -> String {
    text.to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_lower() {
        assert_eq!(make_lower("HELLO"), "hello");
        assert_eq!(make_lower("WoRlD"), "world");
        assert_eq!(make_lower("123ABC"), "123abc");
        assert_eq!(make_lower(""), "");
        assert_eq!(make_lower("already"), "already");
    }

    #[test]
    fn test_make_lower_ascii_only() {
        assert_eq!(make_lower("ÄBC"), "Äbc");
    }

    #[test]
    fn test_split_single_delimiter() {
        assert_eq!(split("a.b.c", '.'), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_delimiter_string() {
        assert_eq!(split("a.b,c;d", ".,;"), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_split_delimiter_collections() {
        assert_eq!(split("a-b_c", vec!['-', '_']), vec!["a", "b", "c"]);
        assert_eq!(split("a-b_c", ['-', '_']), vec!["a", "b", "c"]);

        let set: HashSet<char> = ['-', '_'].into_iter().collect();
        assert_eq!(split("a-b_c", set), vec!["a", "b", "c"]);

        let ordered: BTreeSet<char> = ['-'].into_iter().collect();
        assert_eq!(split("a-b_c", ordered), vec!["a", "b_c"]);

        let slice: &[char] = &['_'];
        assert_eq!(split("a-b_c", slice), vec!["a-b", "c"]);
    }

    #[test]
    fn test_split_empty_string() {
        assert_eq!(split("", '.'), vec![""]);
    }

    #[test]
    fn test_split_no_delimiter() {
        assert_eq!(split("abc", '.'), vec!["abc"]);
    }

    #[test]
    fn test_split_consecutive_delimiters() {
        assert_eq!(split("a..b", '.'), vec!["a", "", "b"]);
    }

    #[test]
    fn test_split_leading_and_trailing_delimiters() {
        assert_eq!(split(".abc", '.'), vec!["", "abc"]);
        assert_eq!(split("abc.", '.'), vec!["abc", ""]);
    }
}
