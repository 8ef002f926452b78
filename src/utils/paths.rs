//! Cross-Platform Path Utilities
//!
//! Resolves where VidQuiz keeps its settings file.

use std::path::{Path, PathBuf};

use crate::utils::error::{AppError, AppResult};

/// Get the VidQuiz config directory (`<platform config dir>/vidquiz/`)
pub fn vidquiz_config_dir() -> AppResult<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("vidquiz"))
        .ok_or_else(|| AppError::config("Could not determine config directory"))
}

/// Get the settings file path (`<config dir>/vidquiz/settings.json`)
pub fn settings_path() -> AppResult<PathBuf> {
    Ok(vidquiz_config_dir()?.join("settings.json"))
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_dir(path: &Path) -> AppResult<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}
