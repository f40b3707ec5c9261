//! Configuration management for quizdeck

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::quiz::QuizConfig;
use crate::theme::Theme;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Use the dark theme
    pub dark_mode: bool,

    /// Delay before an answered true/false question moves on by itself in
    /// interactive mode (milliseconds, 0 = wait for Enter)
    pub auto_advance_ms: u64,

    /// Fixed seed for question generation (random when unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Values the setup screen starts from
    pub defaults: QuizConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self { dark_mode: false, auto_advance_ms: 2500, seed: None, defaults: QuizConfig::default() }
    }
}

impl Config {
    /// Load configuration from disk, or create default if not exists
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a specific file, writing defaults if missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {:?}", path))?;
            let config = serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse {:?}", path))?;
            tracing::debug!(?path, "Loaded config");
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(path)?;
            tracing::info!(?path, "Wrote default config");
            Ok(config)
        }
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let contents =
            serde_json::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }

    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let proj_dirs =
            ProjectDirs::from("", "", "quizdeck").context("Failed to determine config directory")?;
        Ok(proj_dirs.config_dir().join("config.json"))
    }

    /// Get the data directory path
    pub fn data_dir() -> Result<PathBuf> {
        let proj_dirs =
            ProjectDirs::from("", "", "quizdeck").context("Failed to determine data directory")?;
        Ok(proj_dirs.data_dir().to_path_buf())
    }

    /// Get the log file path
    pub fn log_path() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join("quizdeck.log"))
    }

    /// Get the active theme
    pub fn active_theme(&self) -> Theme {
        if self.dark_mode { Theme::brutalist_dark() } else { Theme::brutalist_light() }
    }
}
