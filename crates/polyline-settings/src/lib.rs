//! Polyline Editor Settings Crate
//!
//! Handles editor preferences and their persistence. Drawn figures are never
//! written here; only values that shape the editor itself.

pub mod config;
pub mod error;
pub mod manager;

pub use config::{Config, EditorSettings, Theme, UiSettings};
pub use error::{ConfigError, SettingsError, SettingsResult};
pub use manager::SettingsManager;
