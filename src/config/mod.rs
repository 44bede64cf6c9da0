//! This module handles the crate's configuration, including loading and saving
//! toast preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_toast::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.auto_hide_secs = Some(4.0);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

mod defaults;

pub use defaults::*;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedToast";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Display duration for each toast, in seconds.
    #[serde(default)]
    pub auto_hide_secs: Option<f32>,
    /// Vertical anchor of the toast center (fraction of display height).
    #[serde(default)]
    pub vertical_anchor: Option<f32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            auto_hide_secs: Some(DEFAULT_AUTO_HIDE_SECS),
            vertical_anchor: Some(DEFAULT_VERTICAL_ANCHOR),
        }
    }
}

impl Config {
    /// Resolves the auto-hide duration, clamping persisted values so a
    /// hand-edited config cannot request nonsensical display times.
    #[must_use]
    pub fn auto_hide(&self) -> Duration {
        let secs = self
            .auto_hide_secs
            .unwrap_or(DEFAULT_AUTO_HIDE_SECS)
            .clamp(MIN_AUTO_HIDE_SECS, MAX_AUTO_HIDE_SECS);
        Duration::from_secs_f32(secs)
    }

    /// Resolves the vertical anchor, clamped to the supported range.
    #[must_use]
    pub fn anchor(&self) -> f32 {
        self.vertical_anchor
            .unwrap_or(DEFAULT_VERTICAL_ANCHOR)
            .clamp(MIN_VERTICAL_ANCHOR, MAX_VERTICAL_ANCHOR)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
