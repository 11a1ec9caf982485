//! # Polyline Editor
//!
//! An interactive drawing editor for closed polygons. Figures are built by
//! clicking vertices and closed by clicking back near the first one; every
//! finished figure is filled with an axis-aligned grid clipped to its
//! interior.
//!
//! ## Architecture
//!
//! The editor is organized as a workspace with multiple crates:
//!
//! 1. **polyline-core** - Geometry primitives, constants, shared errors
//! 2. **polyline-designer** - Authoring state machine, figure registry,
//!    clipped grid and the render adapter interface
//! 3. **polyline-settings** - Configuration model and persistence
//! 4. **polyline-ui** - GTK4 window, ribbon and canvas
//! 5. **polyline-editor** - Main binary that integrates all crates

pub use polyline_designer as designer;
pub use polyline_ui::ui;

pub use polyline_core::{fuzzy_compare, Bounds, ConfigValueError, Point};

pub use polyline_designer::{
    render_scene, AuthoringState, ClickOutcome, ClippedGrid, DrawCommand, DrawList, Figure,
    FigureId, FigureRegistry, GridSegment, GridStep, PointerEvent, Polygon, PolygonTool,
    PolylineScene, RenderAdapter, SceneChange,
};

pub use polyline_settings::{Config, EditorSettings, SettingsManager, Theme, UiSettings};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    // In Windows GUI mode (release builds), log to a file instead of stdout
    #[cfg(all(target_os = "windows", not(debug_assertions)))]
    {
        use std::fs::OpenOptions;

        let log_dir = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
            .unwrap_or_else(|| std::path::PathBuf::from("."));

        let log_file = log_dir.join("polyline-editor.log");

        match OpenOptions::new().create(true).append(true).open(&log_file) {
            Ok(file) => {
                let fmt_layer = fmt::layer()
                    .with_writer(file)
                    .with_ansi(false)
                    .with_target(true)
                    .with_level(true)
                    .with_line_number(true);

                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(fmt_layer)
                    .try_init()?;
            }
            Err(_) => {
                tracing_subscriber::registry().with(env_filter).try_init()?;
            }
        }
    }

    #[cfg(not(all(target_os = "windows", not(debug_assertions))))]
    {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stdout)
            .with_target(true)
            .with_level(true)
            .with_thread_ids(true)
            .with_thread_names(true)
            .with_line_number(true)
            .pretty();

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    }

    Ok(())
}
