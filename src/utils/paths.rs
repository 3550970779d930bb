//! Path Utilities
//!
//! Where the config file lives by default, and directory creation for
//! config and export targets.

use std::path::{Path, PathBuf};

use crate::utils::error::{AppError, AppResult};

/// ~/.copyforge/
pub fn copyforge_dir() -> AppResult<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(".copyforge"))
        .ok_or_else(|| AppError::config("Could not determine home directory"))
}

/// Get the config file path (~/.copyforge/config.json)
pub fn config_path() -> AppResult<PathBuf> {
    Ok(copyforge_dir()?.join("config.json"))
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_dir(path: &Path) -> AppResult<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}
