//! # Polyline Editor Designer
//!
//! The drawing model of the editor, independent of any widget toolkit.
//!
//! ## Core Components
//!
//! - **Authoring**: the click-driven state machine that places vertices,
//!   closes a shape near its first vertex and cancels on secondary click
//! - **Registry**: owns every finished figure and its derived grid
//! - **Grid**: axis-aligned grid lines clipped to a polygon interior
//! - **Renderer**: the adapter interface hosts implement to draw a scene
//! - **Scene**: the facade that routes pointer events to the parts above
//!
//! ## Architecture
//!
//! ```text
//! PolylineScene (pointer events, cursor)
//!   ├── PolygonTool (Idle / Authoring)
//!   └── FigureRegistry
//!         └── Figure
//!               ├── Polygon (outline)
//!               └── ClippedGrid (derived)
//!
//! render_scene ──> RenderAdapter (host surface)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use polyline_designer::{DrawList, GridStep, Point, PolylineScene, render_scene};
//!
//! let mut scene = PolylineScene::new(GridStep::default());
//! scene.primary_click(Point::new(0.0, 0.0));
//! scene.primary_click(Point::new(100.0, 0.0));
//! scene.primary_click(Point::new(100.0, 100.0));
//! scene.primary_click(Point::new(4.0, 4.0));
//! assert_eq!(scene.registry().len(), 1);
//!
//! let mut list = DrawList::new();
//! render_scene(&scene, &mut list);
//! assert!(!list.is_empty());
//! ```

pub mod authoring;
pub mod error;
pub mod grid;
pub mod model;
pub mod registry;
pub mod renderer;
pub mod scene;

pub use authoring::{AuthoringState, ClickOutcome, PolygonTool};
pub use error::{DesignerError, DesignerResult};
pub use grid::{Axis, ClippedGrid, GridSegment, GridStep};
pub use model::Polygon;
pub use polyline_core::{Bounds, Point};
pub use registry::{Figure, FigureId, FigureRegistry};
pub use renderer::{render_scene, DrawCommand, DrawList, RenderAdapter};
pub use scene::{PointerEvent, PolylineScene, SceneChange};
