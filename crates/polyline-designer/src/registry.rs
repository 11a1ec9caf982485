//! Figure registry.
//!
//! The registry exclusively owns every finished figure together with its
//! derived clipped grid. Figures are never removed; the only mutation after
//! creation is a grid step change, which is applied to all of them at once.

use std::fmt;

use polyline_core::Bounds;
use tracing::{debug, info, warn};

use crate::grid::{self, ClippedGrid, GridStep};
use crate::model::Polygon;

/// Identifier assigned to a figure when it is registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FigureId(u64);

impl FigureId {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for FigureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Figure #{}", self.0)
    }
}

/// A finished polygon and its derived render artifacts.
#[derive(Debug, Clone)]
pub struct Figure {
    id: FigureId,
    polygon: Polygon,
    grid: ClippedGrid,
}

impl Figure {
    pub fn id(&self) -> FigureId {
        self.id
    }

    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    pub fn grid(&self) -> &ClippedGrid {
        &self.grid
    }

    pub fn bounds(&self) -> Bounds {
        self.polygon.bounds()
    }

    pub fn vertex_count(&self) -> usize {
        self.polygon.len()
    }
}

#[derive(Debug, Clone)]
pub struct FigureRegistry {
    figures: Vec<Figure>,
    grid_step: GridStep,
    next_id: u64,
}

impl Default for FigureRegistry {
    fn default() -> Self {
        Self::new(GridStep::default())
    }
}

impl FigureRegistry {
    pub fn new(grid_step: GridStep) -> Self {
        Self {
            figures: Vec::new(),
            grid_step,
            next_id: 1,
        }
    }

    /// Stores a new figure and builds its grid at the current step.
    pub fn add_figure(&mut self, polygon: Polygon) -> FigureId {
        let id = FigureId(self.next_id);
        self.next_id += 1;

        let grid = ClippedGrid::new(polygon.clone(), self.grid_step);
        info!(
            %id,
            vertices = polygon.len(),
            grid_segments = grid.segments().len(),
            "Figure added"
        );
        self.figures.push(Figure { id, polygon, grid });
        id
    }

    /// Changes the grid step of every figure, present and future.
    ///
    /// Non-positive, non-finite and unchanged values are ignored, as is a
    /// step that would put more than [`grid::MAX_LINES_PER_AXIS`] lines
    /// across any stored figure. Returns whether the step was updated.
    pub fn set_grid_step(&mut self, step: f64) -> bool {
        let Ok(step) = GridStep::new(step) else {
            debug!(step, "Ignoring invalid grid step");
            return false;
        };
        if step.approx_eq(self.grid_step) {
            return false;
        }
        if let Some(figure) = self
            .figures
            .iter()
            .find(|f| !grid::step_fits(&f.bounds(), step))
        {
            warn!(
                step = step.value(),
                figure = %figure.id,
                "Ignoring grid step; too many grid lines"
            );
            return false;
        }

        self.grid_step = step;
        for figure in &mut self.figures {
            figure.grid.set_step(step);
        }
        info!(
            step = step.value(),
            figures = self.figures.len(),
            "Grid step changed"
        );
        true
    }

    pub fn grid_step(&self) -> f64 {
        self.grid_step.value()
    }

    pub fn get(&self, id: FigureId) -> Option<&Figure> {
        self.figures.iter().find(|f| f.id == id)
    }

    /// Figures in creation order.
    pub fn figures(&self) -> impl Iterator<Item = &Figure> + '_ {
        self.figures.iter()
    }

    pub fn len(&self) -> usize {
        self.figures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.figures.is_empty()
    }
}
