//! Pairwise tag helpers

use tagpath::domain::{Tag, TagHelper};

#[test]
fn test_is_parent_of() {
    let weapon = Tag::new("weapon");
    assert_eq!(TagHelper::is_parent_of(&weapon, &Tag::new("weapon.sword")), Some(true));
    assert_eq!(TagHelper::is_parent_of(&weapon, &Tag::new("armor")), Some(false));
    assert_eq!(TagHelper::is_parent_of(&weapon, &weapon), Some(true));
}

#[test]
fn test_is_parent_of_with_npos() {
    let tag = Tag::new("weapon");
    assert_eq!(TagHelper::is_parent_of(&tag, &Tag::NPOS), None);
    assert_eq!(TagHelper::is_parent_of(&Tag::NPOS, &tag), None);
}

#[test]
fn test_is_child_of() {
    let weapon = Tag::new("weapon");
    assert_eq!(TagHelper::is_child_of(&Tag::new("weapon.sword"), &weapon), Some(true));
    assert_eq!(TagHelper::is_child_of(&Tag::new("armor"), &weapon), Some(false));
    assert_eq!(
        TagHelper::is_child_of(&Tag::new("weapon.sword.legendary"), &weapon),
        Some(true)
    );
}

#[test]
fn test_common_parent_same_root() {
    let common = TagHelper::common_parent(
        &Tag::new("weapon.sword.legendary"),
        &Tag::new("weapon.bow.epic"),
    );
    assert_eq!(common.unwrap().to_string(), "weapon");
}

#[test]
fn test_common_parent_deeper() {
    let common = TagHelper::common_parent(
        &Tag::new("weapon.sword.legendary.excalibur"),
        &Tag::new("weapon.sword.epic.durandal"),
    );
    assert_eq!(common, Some(Tag::new("weapon.sword")));
}

#[test]
fn test_common_parent_none() {
    assert_eq!(
        TagHelper::common_parent(&Tag::new("weapon.sword"), &Tag::new("armor.helmet")),
        None
    );
    assert_eq!(
        TagHelper::common_parent(&Tag::new("weapon"), &Tag::new("armor")),
        None
    );
}

#[test]
fn test_common_parent_same_tags() {
    let tag = Tag::new("weapon.sword");
    assert_eq!(TagHelper::common_parent(&tag, &tag), Some(tag.clone()));
}

#[test]
fn test_common_parent_one_is_parent() {
    let common =
        TagHelper::common_parent(&Tag::new("weapon"), &Tag::new("weapon.sword.legendary"));
    assert_eq!(common.unwrap().to_string(), "weapon");
}

#[test]
fn test_common_parent_with_npos() {
    let tag = Tag::new("weapon");
    assert!(TagHelper::common_parent(&tag, &Tag::NPOS).is_none());
    assert!(TagHelper::common_parent(&Tag::NPOS, &tag).is_none());
}
