//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tagpath")]
#[command(about = "Inspect and relate hierarchical dot-separated tags", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a tag and print its canonical form
    Parse {
        /// Tag text (e.g., weapon.sword.legendary)
        tag: String,
    },

    /// Show depth, root and ancestors of a tag
    Inspect { tag: String },

    /// Print the ancestor at a 0-based level (npos when out of range)
    Parent { tag: String, level: usize },

    /// Print the first COUNT segments (clamped to the tag's depth)
    Sub { tag: String, count: usize },

    /// Show parent, child and sibling relations between two tags
    Relate { left: String, right: String },

    /// Print the longest common parent of two tags
    Common { left: String, right: String },

    /// Split text on delimiter characters, one token per line
    Split {
        text: String,

        /// Candidate delimiter characters
        #[arg(short, long, default_value = ".")]
        delimiters: String,

        /// Lowercase (ASCII) before splitting
        #[arg(long)]
        lower: bool,
    },

    /// Write a default .tagpath.toml
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
