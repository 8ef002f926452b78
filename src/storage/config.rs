//! JSON Configuration Management
//!
//! Handles reading and writing the quiz settings file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::models::settings::{QuizSettings, SettingsUpdate};
use crate::utils::error::AppResult;
use crate::utils::paths::{ensure_dir, settings_path};

/// Configuration service for managing quiz settings
#[derive(Debug)]
pub struct ConfigService {
    config_path: PathBuf,
    config: QuizSettings,
}

impl ConfigService {
    /// Open the settings file at the platform default location
    pub fn open_default() -> AppResult<Self> {
        Self::open(settings_path()?)
    }

    /// Open the settings file at `path`, creating it with defaults if missing
    pub fn open(path: impl Into<PathBuf>) -> AppResult<Self> {
        let config_path = path.into();
        if let Some(parent) = config_path.parent() {
            ensure_dir(parent)?;
        }

        let config = if config_path.exists() {
            Self::load_from_file(&config_path)?
        } else {
            let default_config = QuizSettings::default();
            Self::save_to_file(&config_path, &default_config)?;
            tracing::info!("Created default settings at {}", config_path.display());
            default_config
        };

        Ok(Self {
            config_path,
            config,
        })
    }

    /// Load configuration from a file
    fn load_from_file(path: &Path) -> AppResult<QuizSettings> {
        let content = fs::read_to_string(path)?;
        let config: QuizSettings = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file with pretty formatting
    fn save_to_file(path: &Path, config: &QuizSettings) -> AppResult<()> {
        config.validate()?;
        let content = serde_json::to_string_pretty(config)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Path of the backing settings file
    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Get the current configuration
    pub fn get_config(&self) -> &QuizSettings {
        &self.config
    }

    /// Update the configuration with a partial update.
    ///
    /// An update that fails validation leaves both the file and the
    /// in-memory settings untouched.
    pub fn update_config(&mut self, update: SettingsUpdate) -> AppResult<QuizSettings> {
        let mut candidate = self.config.clone();
        candidate.apply_update(update);
        Self::save_to_file(&self.config_path, &candidate)?;
        self.config = candidate;
        Ok(self.config.clone())
    }

    /// Save the current configuration to disk
    pub fn save(&self) -> AppResult<()> {
        Self::save_to_file(&self.config_path, &self.config)
    }

    /// Reload configuration from disk
    pub fn reload(&mut self) -> AppResult<()> {
        self.config = Self::load_from_file(&self.config_path)?;
        Ok(())
    }

    /// Reset configuration to defaults
    pub fn reset(&mut self) -> AppResult<()> {
        self.config = QuizSettings::default();
        self.save()
    }
}
