//! Configuration management

use crate::domain::{make_lower, Tag};
use crate::error::{Result, TagpathError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the config file looked up from the current directory upwards
pub const CONFIG_FILE_NAME: &str = ".tagpath.toml";

/// Environment variable pointing at an explicit config file
pub const CONFIG_ENV_VAR: &str = "TAGPATH_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Reject malformed tag text instead of storing it verbatim
    pub strict: bool,
    /// Lowercase tag text (ASCII) before parsing
    pub fold_case: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            strict: true,
            fold_case: false,
        }
    }
}

impl Config {
    /// Load config from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TagpathError::ConfigNotFound(path.to_path_buf())
            } else {
                TagpathError::Io(e)
            }
        })?;

        toml::from_str(&contents).map_err(|e| {
            TagpathError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Save config to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Locate the config file to use, if any
    ///
    /// `TAGPATH_CONFIG` wins and must name an existing file. Otherwise the
    /// current directory and its ancestors are searched for `.tagpath.toml`.
    pub fn discover_path() -> Result<Option<PathBuf>> {
        if let Ok(explicit) = std::env::var(CONFIG_ENV_VAR) {
            let path = PathBuf::from(explicit);
            if path.is_file() {
                return Ok(Some(path));
            }
            return Err(TagpathError::ConfigNotFound(path));
        }

        let current_dir = std::env::current_dir()?;
        Ok(Self::find_from(&current_dir))
    }

    /// Walk up from `start` looking for `.tagpath.toml`
    pub fn find_from(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(CONFIG_FILE_NAME))
            .find(|candidate| candidate.is_file())
    }

    /// Load the discovered config, falling back to defaults
    pub fn discover() -> Result<Self> {
        match Self::discover_path()? {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading config");
                Self::load_from_file(&path)
            }
            None => {
                tracing::debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Turn user input into a tag according to this config
    pub fn read_tag(&self, text: &str) -> Result<Tag> {
        let text = if self.fold_case {
            make_lower(text)
        } else {
            text.to_string()
        };

        if self.strict {
            text.parse()
        } else {
            Ok(Tag::new(&text))
        }
    }
}
