//! Domain layer - Tags and the relations between them

pub mod helper;
pub mod tag;
pub mod text;

pub use helper::TagHelper;
pub use tag::Tag;
pub use text::{make_lower, split, Delimiters};
