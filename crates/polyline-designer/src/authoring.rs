//! Interactive polygon authoring.
//!
//! `PolygonTool` is the click-driven state machine behind the polygon tool:
//!
//! ```text
//!            primary click P                      secondary click
//!   Idle ──────────────────────> Authoring [P] ───────────────────> Idle
//!    ^                             │    ^
//!    │  primary click near first   │    │ primary click elsewhere
//!    └─────── (>= 3 vertices) ─────┘    └── (append vertex)
//! ```
//!
//! The in-progress vertices live inside the `Authoring` variant, so an idle
//! tool can never hold a stale path and an authoring tool always has at
//! least one vertex.

use polyline_core::constants::{CLOSE_THRESHOLD, MIN_FIGURE_VERTICES};
use polyline_core::Point;
use tracing::{debug, warn};

use crate::model::Polygon;

/// Current state of the polygon tool.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AuthoringState {
    #[default]
    Idle,
    Authoring {
        path: Vec<Point>,
    },
}

/// What a click did to the tool.
#[derive(Debug, Clone, PartialEq)]
pub enum ClickOutcome {
    /// A new path was started with its first vertex.
    Started,
    /// A vertex was appended; `count` is the new path length.
    VertexAdded { count: usize },
    /// The path was closed into a polygon and the tool is idle again.
    Closed(Polygon),
    /// The in-progress path was dropped.
    Cancelled { discarded: usize },
    /// Nothing happened.
    Ignored,
}

#[derive(Debug, Clone)]
pub struct PolygonTool {
    state: AuthoringState,
    close_threshold: f64,
}

impl Default for PolygonTool {
    fn default() -> Self {
        Self::new()
    }
}

impl PolygonTool {
    pub fn new() -> Self {
        Self::with_close_threshold(CLOSE_THRESHOLD)
    }

    pub fn with_close_threshold(close_threshold: f64) -> Self {
        Self {
            state: AuthoringState::Idle,
            close_threshold,
        }
    }

    pub fn state(&self) -> &AuthoringState {
        &self.state
    }

    pub fn is_authoring(&self) -> bool {
        matches!(self.state, AuthoringState::Authoring { .. })
    }

    pub fn close_threshold(&self) -> f64 {
        self.close_threshold
    }

    /// Vertices placed so far; empty while idle.
    pub fn path(&self) -> &[Point] {
        match &self.state {
            AuthoringState::Idle => &[],
            AuthoringState::Authoring { path } => path.as_slice(),
        }
    }

    pub fn first_vertex(&self) -> Option<Point> {
        self.path().first().copied()
    }

    pub fn last_vertex(&self) -> Option<Point> {
        self.path().last().copied()
    }

    pub fn is_close_to_first(&self, p: &Point) -> bool {
        self.first_vertex()
            .is_some_and(|first| first.distance_to(p) <= self.close_threshold)
    }

    /// Whether a primary click at `p` would close the current path.
    ///
    /// Clicking near the start of a path with fewer than three vertices is
    /// not a close; it places an ordinary vertex.
    pub fn can_close_at(&self, p: &Point) -> bool {
        self.path().len() >= MIN_FIGURE_VERTICES && self.is_close_to_first(p)
    }

    pub fn primary_click(&mut self, p: Point) -> ClickOutcome {
        if self.can_close_at(&p) {
            return self.finalize();
        }

        match &mut self.state {
            AuthoringState::Idle => {
                debug!(x = p.x, y = p.y, "Polygon started");
                self.state = AuthoringState::Authoring { path: vec![p] };
                ClickOutcome::Started
            }
            AuthoringState::Authoring { path } => {
                path.push(p);
                debug!(x = p.x, y = p.y, count = path.len(), "Vertex added");
                ClickOutcome::VertexAdded { count: path.len() }
            }
        }
    }

    /// Secondary clicks cancel regardless of where they land.
    pub fn secondary_click(&mut self, _p: Point) -> ClickOutcome {
        self.cancel()
    }

    pub fn cancel(&mut self) -> ClickOutcome {
        match std::mem::take(&mut self.state) {
            AuthoringState::Idle => ClickOutcome::Ignored,
            AuthoringState::Authoring { path } => {
                debug!(discarded = path.len(), "Polygon cancelled");
                ClickOutcome::Cancelled {
                    discarded: path.len(),
                }
            }
        }
    }

    /// Segment from the last placed vertex to `cursor`, while authoring.
    pub fn preview_segment(&self, cursor: Point) -> Option<(Point, Point)> {
        self.last_vertex().map(|last| (last, cursor))
    }

    fn finalize(&mut self) -> ClickOutcome {
        let AuthoringState::Authoring { path } = std::mem::take(&mut self.state) else {
            return ClickOutcome::Ignored;
        };
        match Polygon::new(path) {
            Ok(polygon) => {
                debug!(vertices = polygon.len(), "Polygon closed");
                ClickOutcome::Closed(polygon)
            }
            Err(e) => {
                warn!("Failed to close polygon: {}", e);
                ClickOutcome::Ignored
            }
        }
    }
}
