//! # Polyline Editor UI
//!
//! GTK-based user interface for the Polyline Editor.

pub mod gtk_app;
pub mod ui;

pub use polyline_settings::{Config, EditorSettings, SettingsManager, Theme, UiSettings};
pub use ui::gtk::canvas::PolylineCanvas;
pub use ui::gtk::painter::{CairoPainter, PaintStyle};
