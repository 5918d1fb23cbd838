//! Initialize config use case

use crate::error::{Result, TagpathError};
use crate::infrastructure::config::CONFIG_FILE_NAME;
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};

/// Write a default `.tagpath.toml` into `path`, returning the file written
pub fn init(path: &Path) -> Result<PathBuf> {
    // Create the directory if it doesn't exist
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let config_path = path.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        return Err(TagpathError::AlreadyInitialized(config_path));
    }

    Config::default().save_to_file(&config_path)?;
    tracing::info!(path = %config_path.display(), "wrote default config");

    Ok(config_path)
}
