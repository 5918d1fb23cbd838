//! Relations between pairs of tags

use super::tag::Tag;

/// Stateless functions over two tags
pub struct TagHelper;

impl TagHelper {
    /// Same as `parent.is_parent(child)`
    pub fn is_parent_of(parent: &Tag, child: &Tag) -> Option<bool> {
        parent.is_parent(child)
    }

    /// Same as `child.is_child(parent)`
    pub fn is_child_of(child: &Tag, parent: &Tag) -> Option<bool> {
        child.is_child(parent)
    }

    /// Longest shared prefix of two tags
    ///
    /// `None` when either tag is npos or the roots already differ. If one
    /// tag is a prefix of the other the shorter one is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagpath::domain::{Tag, TagHelper};
    ///
    /// let a = Tag::new("weapon.sword.legendary.excalibur");
    /// let b = Tag::new("weapon.sword.epic.durandal");
    /// assert_eq!(TagHelper::common_parent(&a, &b), Some(Tag::new("weapon.sword")));
    /// assert_eq!(TagHelper::common_parent(&a, &Tag::new("armor")), None);
    /// ```
    pub fn common_parent(a: &Tag, b: &Tag) -> Option<Tag> {
        if a.is_npos() || b.is_npos() {
            return None;
        }

        let matched = a
            .segments()
            .iter()
            .zip(b.segments())
            .take_while(|(left, right)| left == right)
            .count();

        crate::verify!(
            matched <= a.depth().min(b.depth()),
            "common prefix longer than the shorter tag"
        );

        if matched == 0 {
            return None;
        }

        Some(a.sub_tag(matched))
    }
}
