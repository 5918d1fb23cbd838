//! Hierarchical tags
//!
//! A [`Tag`] is a dot-separated path of named segments such as
//! `weapon.sword.legendary`. The tag with no segments is the sentinel
//! [`Tag::NPOS`], meaning "no tag"; every relation query involving it
//! answers `None` instead of `true` or `false`.
//!
//! # Examples
//!
//! ```
//! use tagpath::domain::Tag;
//!
//! let tag = Tag::try_parse("weapon.sword.legendary").unwrap();
//! assert_eq!(tag.depth(), 3);
//! assert_eq!(tag.root().to_string(), "weapon");
//! assert_eq!(tag.parent(1).to_string(), "weapon.sword");
//! assert_eq!(Tag::new("weapon").is_parent(&tag), Some(true));
//! ```

use super::text::{split, SEPARATOR};
use crate::error::TagpathError;
use std::fmt::{self, Write};
use std::str::FromStr;

/// Immutable hierarchical identifier
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag {
    // Empty means npos.
    segments: Vec<String>,
}

impl Tag {
    /// The "no tag" sentinel, depth 0
    pub const NPOS: Tag = Tag {
        segments: Vec::new(),
    };

    /// Build a tag from trusted text without validation
    ///
    /// Segments are stored exactly as split, empty ones included. The empty
    /// string gives [`Tag::NPOS`]. Use [`Tag::try_parse`] or [`str::parse`]
    /// for input that has not been checked.
    pub fn new(text: &str) -> Self {
        if text.is_empty() {
            return Self::NPOS;
        }

        let segments: Vec<String> = split(text, SEPARATOR)
            .into_iter()
            .map(str::to_string)
            .collect();

        crate::check!(
            segments.iter().all(|s| !s.is_empty()),
            "tag built from text containing an empty segment"
        );

        Tag { segments }
    }

    /// Validating constructor; `None` for empty text or any empty segment
    pub fn try_parse(text: &str) -> Option<Self> {
        text.parse().ok()
    }

    pub(crate) fn from_segments(segments: &[String]) -> Self {
        Tag {
            segments: segments.to_vec(),
        }
    }

    pub fn is_npos(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of segments; 0 for npos
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The first segment as a depth-1 tag
    pub fn root(&self) -> Tag {
        self.sub_tag(1)
    }

    /// Ancestor at a 0-based level
    ///
    /// `parent(0)` is the root and `parent(depth - 1)` is the tag itself.
    /// Returns [`Tag::NPOS`] when `level >= depth`; this accessor does not
    /// clamp, unlike [`Tag::sub_tag`].
    pub fn parent(&self, level: usize) -> Tag {
        if level >= self.depth() {
            return Self::NPOS;
        }
        Self::from_segments(&self.segments[..=level])
    }

    /// Prefix made of the first `count` segments, clamped to the depth
    ///
    /// `sub_tag(0)` is [`Tag::NPOS`]; any `count >= depth` gives the tag back.
    pub fn sub_tag(&self, count: usize) -> Tag {
        let count = count.min(self.depth());
        Self::from_segments(&self.segments[..count])
    }

    /// Every ancestor from the root down to the tag itself
    pub fn ancestors(&self) -> impl Iterator<Item = Tag> + '_ {
        (0..self.depth()).map(move |level| self.parent(level))
    }

    /// Whether this tag is a prefix of `other` (a tag is its own parent)
    pub fn is_parent(&self, other: &Tag) -> Option<bool> {
        if self.is_npos() || other.is_npos() {
            return None;
        }
        Some(other.segments.starts_with(&self.segments))
    }

    /// Whether `other` is a prefix of this tag
    pub fn is_child(&self, other: &Tag) -> Option<bool> {
        other.is_parent(self)
    }

    /// Whether both tags are distinct children of the same parent
    ///
    /// Roots have no parent, so a depth-1 tag is never anyone's sibling.
    pub fn is_sibling(&self, other: &Tag) -> Option<bool> {
        if self.is_npos() || other.is_npos() {
            return None;
        }

        let depth = self.depth();
        if depth < 2 || depth != other.depth() {
            return Some(false);
        }

        Some(self.parent(depth - 2) == other.parent(depth - 2) && self != other)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_char(SEPARATOR)?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

impl FromStr for Tag {
    type Err = TagpathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(TagpathError::EmptyTag);
        }

        let parts = split(s, SEPARATOR);
        if let Some(position) = parts.iter().position(|part| part.is_empty()) {
            return Err(TagpathError::EmptySegment {
                tag: s.to_string(),
                position,
            });
        }

        Ok(Tag {
            segments: parts.into_iter().map(str::to_string).collect(),
        })
    }
}
