//! Error types for tagpath

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for tagpath
#[derive(Debug, Error)]
pub enum TagpathError {
    #[error("Invalid tag: empty text")]
    EmptyTag,

    #[error("Invalid tag '{tag}': empty segment at position {position}")]
    EmptySegment { tag: String, position: usize },

    #[error("No common parent: '{0}' and '{1}'")]
    NoCommonParent(String, String),

    #[error("Config file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("Already initialized: {0}")]
    AlreadyInitialized(PathBuf),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl TagpathError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TagpathError::EmptyTag | TagpathError::EmptySegment { .. } => 2,
            TagpathError::NoCommonParent(..) => 3,
            TagpathError::ConfigNotFound(_)
            | TagpathError::AlreadyInitialized(_)
            | TagpathError::Config(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            TagpathError::EmptyTag | TagpathError::EmptySegment { .. } => {
                format!(
                    "{}\n\n\
                    Tags are dot-separated, non-empty segments:\n\
                    • weapon\n\
                    • weapon.sword.legendary\n\
                    Leading, trailing and doubled dots are rejected.",
                    self
                )
            }
            TagpathError::NoCommonParent(_, _) => {
                format!(
                    "{}\n\n\
                    Two tags share a parent only when their roots match.\n\
                    Use 'tagpath inspect <TAG>' to see a tag's ancestors.",
                    self
                )
            }
            TagpathError::ConfigNotFound(path) => {
                format!(
                    "Config file not found: {}\n\n\
                    Suggestions:\n\
                    • Run 'tagpath init' to create a .tagpath.toml\n\
                    • Point TAGPATH_CONFIG at an existing config file\n\
                    • Unset TAGPATH_CONFIG to use built-in defaults",
                    path.display()
                )
            }
            TagpathError::Config(msg) => {
                if msg.contains("Unknown config key") {
                    format!("{}\n\nValid keys: strict, fold_case", msg)
                } else if msg.contains("expects a boolean") {
                    format!(
                        "{}\n\nExample: tagpath config fold_case true",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using TagpathError
pub type Result<T> = std::result::Result<T, TagpathError>;
