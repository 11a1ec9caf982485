//! Editor-wide constants.

/// Maximum distance from the first vertex at which a click closes the shape.
pub const CLOSE_THRESHOLD: f64 = 10.0;

/// Minimum number of vertices a closed figure must have.
pub const MIN_FIGURE_VERTICES: usize = 3;

/// Grid spacing applied when nothing else is configured.
pub const DEFAULT_GRID_STEP: f64 = 10.0;

/// Smallest grid step the ribbon control accepts.
pub const GRID_STEP_MIN: f64 = 1.0;

/// Largest grid step the ribbon control accepts.
pub const GRID_STEP_MAX: f64 = 1000.0;

/// Half the length of each crosshair arm.
pub const CROSSHAIR_HALF: f64 = 5.0;

/// Radius of the dot drawn on every placed vertex.
pub const VERTEX_MARKER_RADIUS: f64 = 4.0;

/// Width of the drawable scene in canvas units.
pub const SCENE_WIDTH: f64 = 2000.0;

/// Height of the drawable scene in canvas units.
pub const SCENE_HEIGHT: f64 = 1400.0;
