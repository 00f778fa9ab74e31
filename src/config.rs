//! Application configuration module
//!
//! Settings are stored with `confy` in the OS-specific config directory and loaded
//! once at startup. The last used theme, granularity and unchanged-block toggle are
//! written back on exit.

use crate::constant::{
    APP_NAME, APP_ORGANIZATION, APP_QUALIFIER, DEFAULT_COLLAPSE_THRESHOLD, DEFAULT_FONT_SIZE,
};
use crate::diff::Granularity;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Confy(#[from] confy::ConfyError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub struct Config {
    pub settings: Settings,
}

impl Config {
    /// Load configuration from disk, creating default if it doesn't exist
    pub fn load() -> Result<Self, ConfigError> {
        let settings: Settings = confy::load(APP_NAME, None)?;
        info!("Load config from {:?}", Self::config_path()?);
        Ok(Self { settings })
    }

    /// Save current configuration to disk
    pub fn save(&self) -> Result<(), ConfigError> {
        confy::store(APP_NAME, None, &self.settings)?;
        info!("Save config to {:?}", Self::config_path()?);
        Ok(())
    }

    /// Get the application data directory
    /// Falls back to a local "data" directory if platform dirs are unavailable
    pub fn data_dir(&self) -> PathBuf {
        if let Some(proj_dirs) = ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME) {
            proj_dirs.data_dir().to_path_buf()
        } else {
            PathBuf::from("data")
        }
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(confy::get_configuration_file_path(APP_NAME, None)?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::load().unwrap_or_else(|e| {
            warn!("Falling back to default settings: {}", e);
            Self {
                settings: Settings::default(),
            }
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub theme: Theme,

    /// Granularity selected when the app starts
    #[serde(default)]
    pub default_granularity: Granularity,

    #[serde(default = "default_show_unchanged")]
    pub show_unchanged: bool,

    /// Unchanged blocks with more pairs than this start collapsed (0 = never collapse)
    #[serde(default = "default_collapse_threshold")]
    pub collapse_threshold: usize,

    /// Font size of the query editors and the diff view
    #[serde(default = "default_font_size")]
    pub font_size: f32,
}

fn default_show_unchanged() -> bool {
    true
}

fn default_collapse_threshold() -> usize {
    DEFAULT_COLLAPSE_THRESHOLD
}

fn default_font_size() -> f32 {
    DEFAULT_FONT_SIZE
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            default_granularity: Granularity::default(),
            show_unchanged: default_show_unchanged(),
            collapse_threshold: default_collapse_threshold(),
            font_size: default_font_size(),
        }
    }
}
