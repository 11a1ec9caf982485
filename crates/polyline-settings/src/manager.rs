//! Settings location and lifecycle.
//!
//! Resolves the per-user configuration directory and wraps loading and
//! saving so the UI never has to deal with a missing or broken file.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::config::Config;
use crate::error::{ConfigError, SettingsError, SettingsResult};

const APP_DIR: &str = "polyline-editor";
const CONFIG_FILE: &str = "config.json";

/// Settings file management
pub struct SettingsManager;

impl SettingsManager {
    /// Per-user configuration directory for the editor.
    pub fn config_dir() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| {
                ConfigError::UnsupportedPlatform(std::env::consts::OS.to_string()).into()
            })
    }

    /// Path of the default configuration file.
    pub fn config_file_path() -> SettingsResult<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Creates the configuration directory if it does not exist yet.
    pub fn ensure_config_dir() -> SettingsResult<PathBuf> {
        let dir = Self::config_dir()?;
        std::fs::create_dir_all(&dir)
            .map_err(|e| SettingsError::ConfigDirectory(format!("{}: {}", dir.display(), e)))?;
        Ok(dir)
    }

    /// Loads the config at `path`, falling back to defaults when the file is
    /// missing or invalid.
    pub fn load_or_default(path: &Path) -> Config {
        if !path.exists() {
            info!("No settings file at {}, using defaults", path.display());
            return Config::default();
        }

        match Config::load_from_file(path) {
            Ok(config) => {
                info!("Loaded settings from {}", path.display());
                config
            }
            Err(e) => {
                warn!("Failed to load settings from {}: {}", path.display(), e);
                Config::default()
            }
        }
    }

    /// Saves `config` to `path`, creating parent directories as needed.
    pub fn save(config: &Config, path: &Path) -> SettingsResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        config.save_to_file(path)
    }

    /// Loads the user's config from the default location.
    pub fn load_user_config() -> Config {
        match Self::config_file_path() {
            Ok(path) => Self::load_or_default(&path),
            Err(e) => {
                warn!("Settings location unavailable: {}", e);
                Config::default()
            }
        }
    }

    /// Saves the user's config to the default location.
    pub fn save_user_config(config: &Config) -> SettingsResult<()> {
        Self::ensure_config_dir()?;
        Self::save(config, &Self::config_file_path()?)
    }
}
