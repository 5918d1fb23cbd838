//! Config management use case

use crate::error::{Result, TagpathError};
use crate::infrastructure::Config;
use std::path::PathBuf;

/// Service for reading and editing a config file
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    /// Create a new config service for the file at `path`
    pub fn new(path: PathBuf) -> Self {
        ConfigService { path }
    }

    /// Service for the discovered config file
    pub fn discover() -> Result<Self> {
        let path = Config::discover_path()?.ok_or_else(|| {
            TagpathError::Config(
                "No .tagpath.toml found. Run 'tagpath init' first".to_string(),
            )
        })?;
        Ok(Self::new(path))
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Get the whole config
    pub fn list(&self) -> Result<Config> {
        Config::load_from_file(&self.path)
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.list()?;

        match key {
            "strict" => Ok(config.strict.to_string()),
            "fold_case" => Ok(config.fold_case.to_string()),
            _ => Err(TagpathError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: strict, fold_case",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.list()?;
        let flag = parse_flag(key, value)?;

        match key {
            "strict" => config.strict = flag,
            "fold_case" => config.fold_case = flag,
            _ => {
                return Err(TagpathError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: strict, fold_case",
                    key
                )));
            }
        }

        config.save_to_file(&self.path)?;
        tracing::info!(key, value = flag, "config updated");
        Ok(())
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(TagpathError::Config(format!(
            "'{}' expects a boolean, got '{}'",
            key, value
        ))),
    }
}
