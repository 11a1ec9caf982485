//! Configuration for the Polyline Editor
//!
//! Provides the configuration model, file handling and validation.
//! Supports JSON and TOML file formats; the format is picked from the file
//! extension.
//!
//! Configuration is organized into sections:
//! - Editor settings (grid step)
//! - UI preferences (window size, theme)

use polyline_core::constants::{DEFAULT_GRID_STEP, GRID_STEP_MAX, GRID_STEP_MIN};
use polyline_core::error::ConfigValueError;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ConfigError, SettingsError, SettingsResult};

/// Theme selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Follow system preference
    #[default]
    System,
    /// Force light theme
    Light,
    /// Force dark theme
    Dark,
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::System => write!(f, "System"),
            Self::Light => write!(f, "Light"),
            Self::Dark => write!(f, "Dark"),
        }
    }
}

/// Drawing editor settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorSettings {
    /// Spacing of the grid drawn inside every figure
    pub grid_step: f64,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            grid_step: DEFAULT_GRID_STEP,
        }
    }
}

/// UI preference settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiSettings {
    /// Window width
    pub window_width: u32,
    /// Window height
    pub window_height: u32,
    /// Selected theme (light/dark/system)
    #[serde(default)]
    pub theme: Theme,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            window_width: 1280,
            window_height: 840,
            theme: Theme::System,
        }
    }
}

impl UiSettings {
    /// Window size as GTK expects it, saturating at `i32::MAX`.
    pub fn window_size(&self) -> (i32, i32) {
        (
            i32::try_from(self.window_width).unwrap_or(i32::MAX),
            i32::try_from(self.window_height).unwrap_or(i32::MAX),
        )
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub editor: EditorSettings,
    #[serde(default)]
    pub ui: UiSettings,
}

enum FileFormat {
    Json,
    Toml,
}

impl FileFormat {
    fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(other.unwrap_or("").to_string()).into()),
        }
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = FileFormat::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let config: Self = match format {
            FileFormat::Json => serde_json::from_str(&content)?,
            FileFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match FileFormat::from_path(path)? {
            FileFormat::Json => serde_json::to_string_pretty(self)?,
            FileFormat::Toml => toml::to_string_pretty(self)?,
        };

        std::fs::write(path, content).map_err(|e| {
            SettingsError::SaveError(format!("{}: {}", path.display(), e))
        })?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let step = self.editor.grid_step;
        if !(GRID_STEP_MIN..=GRID_STEP_MAX).contains(&step) {
            return Err(ConfigValueError::OutOfRange {
                key: "editor.grid_step".to_string(),
                value: step,
                min: GRID_STEP_MIN,
                max: GRID_STEP_MAX,
            }
            .into());
        }

        if self.ui.window_width == 0 {
            return Err(ConfigValueError::NotPositive {
                key: "ui.window_width".to_string(),
            }
            .into());
        }
        if self.ui.window_height == 0 {
            return Err(ConfigValueError::NotPositive {
                key: "ui.window_height".to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// Stores a grid step coming from the UI, clamped to the accepted range.
    pub fn set_grid_step(&mut self, step: f64) {
        if step.is_finite() {
            self.editor.grid_step = step.clamp(GRID_STEP_MIN, GRID_STEP_MAX);
        }
    }
}
