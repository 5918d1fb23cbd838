//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands};
pub use output::{format_answer, format_relation, format_report, format_tag, format_tokens};
