//! Integration tests for the tag query commands

#![allow(deprecated)]

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::tagpath_cmd;

#[test]
fn test_parse_prints_canonical_form() {
    let temp = TempDir::new().unwrap();

    tagpath_cmd()
        .current_dir(temp.path())
        .arg("parse")
        .arg("weapon.sword.legendary")
        .assert()
        .success()
        .stdout("weapon.sword.legendary\n");
}

#[test]
fn test_parse_rejects_empty_segment() {
    let temp = TempDir::new().unwrap();

    tagpath_cmd()
        .current_dir(temp.path())
        .arg("parse")
        .arg("weapon..sword")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("empty segment at position 1"));
}

#[test]
fn test_parse_rejects_empty_text() {
    let temp = TempDir::new().unwrap();

    tagpath_cmd()
        .current_dir(temp.path())
        .arg("parse")
        .arg("")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid tag: empty text"));
}

#[test]
fn test_inspect() {
    let temp = TempDir::new().unwrap();

    tagpath_cmd()
        .current_dir(temp.path())
        .arg("inspect")
        .arg("weapon.sword.legendary")
        .assert()
        .success()
        .stdout(predicate::str::contains("depth:  3"))
        .stdout(predicate::str::contains("root:   weapon"))
        .stdout(predicate::str::contains("[1] weapon.sword\n"));
}

#[test]
fn test_parent_in_and_out_of_range() {
    let temp = TempDir::new().unwrap();

    tagpath_cmd()
        .current_dir(temp.path())
        .args(["parent", "weapon.sword.legendary.excalibur", "1"])
        .assert()
        .success()
        .stdout("weapon.sword\n");

    tagpath_cmd()
        .current_dir(temp.path())
        .args(["parent", "weapon.sword.legendary.excalibur", "5"])
        .assert()
        .success()
        .stdout("npos\n");
}

#[test]
fn test_sub_clamps() {
    let temp = TempDir::new().unwrap();

    tagpath_cmd()
        .current_dir(temp.path())
        .args(["sub", "weapon.sword", "10"])
        .assert()
        .success()
        .stdout("weapon.sword\n");

    tagpath_cmd()
        .current_dir(temp.path())
        .args(["sub", "weapon.sword", "0"])
        .assert()
        .success()
        .stdout("npos\n");
}

#[test]
fn test_relate_siblings() {
    let temp = TempDir::new().unwrap();

    tagpath_cmd()
        .current_dir(temp.path())
        .args(["relate", "weapon.sword", "weapon.bow"])
        .assert()
        .success()
        .stdout("parent:  false\nchild:   false\nsibling: true\ncommon:  weapon\n");
}

#[test]
fn test_relate_roots_are_not_siblings() {
    let temp = TempDir::new().unwrap();

    tagpath_cmd()
        .current_dir(temp.path())
        .args(["relate", "weapon", "armor"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sibling: false"))
        .stdout(predicate::str::contains("common:  none"));
}

#[test]
fn test_common() {
    let temp = TempDir::new().unwrap();

    tagpath_cmd()
        .current_dir(temp.path())
        .args([
            "common",
            "weapon.sword.legendary.excalibur",
            "weapon.sword.epic.durandal",
        ])
        .assert()
        .success()
        .stdout("weapon.sword\n");
}

#[test]
fn test_common_none_fails() {
    let temp = TempDir::new().unwrap();

    tagpath_cmd()
        .current_dir(temp.path())
        .args(["common", "weapon.sword", "armor.helmet"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("No common parent"));
}

#[test]
fn test_split() {
    let temp = TempDir::new().unwrap();

    tagpath_cmd()
        .current_dir(temp.path())
        .args(["split", "a..b"])
        .assert()
        .success()
        .stdout("a\n\"\"\nb\n");

    tagpath_cmd()
        .current_dir(temp.path())
        .args(["split", "A.b,C;d", "--delimiters", ".,;", "--lower"])
        .assert()
        .success()
        .stdout("a\nb\nc\nd\n");
}
