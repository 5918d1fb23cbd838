//! tagpath - Hierarchical dot-separated tags
//!
//! A [`Tag`](domain::Tag) such as `weapon.sword.legendary` is an immutable
//! path of named segments. The library answers ancestry, descent and sibling
//! questions about tags and finds the longest common parent of two tags.
//! The `tagpath` binary exposes the same queries on the command line.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use domain::{Tag, TagHelper};
pub use error::TagpathError;
