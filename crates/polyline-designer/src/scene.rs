//! Scene facade.
//!
//! `PolylineScene` is what a host window talks to: it receives pointer
//! events, keeps track of the cursor, drives the polygon tool and hands
//! closed polygons to the figure registry.

use polyline_core::constants::{SCENE_HEIGHT, SCENE_WIDTH};
use polyline_core::{Bounds, Point};

use crate::authoring::{ClickOutcome, PolygonTool};
use crate::grid::GridStep;
use crate::registry::{FigureId, FigureRegistry};

/// Pointer input consumed by the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary (left) button press.
    Primary(Point),
    /// Secondary (right) button press.
    Secondary(Point),
    /// Pointer moved.
    Move(Point),
}

/// Effect of an input on the scene, used by hosts to schedule repaints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SceneChange {
    Unchanged,
    CursorMoved,
    /// The in-progress path was started, extended or discarded.
    PathChanged,
    FigureAdded(FigureId),
    GridStepChanged,
}

impl SceneChange {
    pub fn needs_redraw(&self) -> bool {
        !matches!(self, SceneChange::Unchanged)
    }
}

#[derive(Debug, Clone)]
pub struct PolylineScene {
    tool: PolygonTool,
    registry: FigureRegistry,
    cursor: Option<Point>,
    bounds: Bounds,
}

impl Default for PolylineScene {
    fn default() -> Self {
        Self::new(GridStep::default())
    }
}

impl PolylineScene {
    pub fn new(grid_step: GridStep) -> Self {
        Self::with_parts(PolygonTool::new(), FigureRegistry::new(grid_step))
    }

    pub fn with_parts(tool: PolygonTool, registry: FigureRegistry) -> Self {
        Self {
            tool,
            registry,
            cursor: None,
            bounds: Bounds::new(0.0, 0.0, SCENE_WIDTH, SCENE_HEIGHT),
        }
    }

    pub fn handle(&mut self, event: PointerEvent) -> SceneChange {
        match event {
            PointerEvent::Primary(p) => self.primary_click(p),
            PointerEvent::Secondary(p) => self.secondary_click(p),
            PointerEvent::Move(p) => self.pointer_move(p),
        }
    }

    pub fn primary_click(&mut self, p: Point) -> SceneChange {
        match self.tool.primary_click(p) {
            ClickOutcome::Closed(polygon) => {
                SceneChange::FigureAdded(self.registry.add_figure(polygon))
            }
            outcome => Self::path_change(outcome),
        }
    }

    pub fn secondary_click(&mut self, p: Point) -> SceneChange {
        let outcome = self.tool.secondary_click(p);
        Self::path_change(outcome)
    }

    /// Drops the in-progress path, as a secondary click would.
    pub fn cancel(&mut self) -> SceneChange {
        let outcome = self.tool.cancel();
        Self::path_change(outcome)
    }

    pub fn pointer_move(&mut self, p: Point) -> SceneChange {
        self.cursor = Some(p);
        SceneChange::CursorMoved
    }

    pub fn set_grid_step(&mut self, step: f64) -> SceneChange {
        if self.registry.set_grid_step(step) {
            SceneChange::GridStepChanged
        } else {
            SceneChange::Unchanged
        }
    }

    pub fn tool(&self) -> &PolygonTool {
        &self.tool
    }

    pub fn registry(&self) -> &FigureRegistry {
        &self.registry
    }

    pub fn is_authoring(&self) -> bool {
        self.tool.is_authoring()
    }

    /// Last known pointer position; `None` until the pointer first moves.
    pub fn cursor(&self) -> Option<Point> {
        self.cursor
    }

    /// The drawable area of the scene.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn grid_step(&self) -> f64 {
        self.registry.grid_step()
    }

    /// Rubber-band segment from the last vertex to the cursor.
    pub fn preview_segment(&self) -> Option<(Point, Point)> {
        self.cursor.and_then(|c| self.tool.preview_segment(c))
    }

    fn path_change(outcome: ClickOutcome) -> SceneChange {
        match outcome {
            ClickOutcome::Ignored => SceneChange::Unchanged,
            _ => SceneChange::PathChanged,
        }
    }
}
