//! Presentation adapter interface.
//!
//! Hosts implement [`RenderAdapter`] for their drawing surface and call
//! [`render_scene`], which issues the draw calls back to front. Adapters
//! only read the scene; the registry keeps ownership of every figure.

use polyline_core::{Bounds, Point};

use crate::grid::ClippedGrid;
use crate::model::Polygon;
use crate::scene::PolylineScene;

/// A surface the scene can be drawn onto.
pub trait RenderAdapter {
    /// Grid lines of one figure, already clipped to its outline.
    fn draw_clipped_grid(&mut self, grid: &ClippedGrid);

    fn draw_figure_outline(&mut self, polygon: &Polygon);

    /// Open polyline through the vertices placed so far (empty when idle).
    fn draw_preview_path(&mut self, points: &[Point]);

    /// Dot on a placed vertex.
    fn draw_vertex_marker(&mut self, _at: Point) {}

    /// Rubber-band segment from the last vertex to the cursor.
    ///
    /// Called on every render so retained surfaces can hide the segment;
    /// `from` and `to` carry no meaning when `visible` is false.
    fn draw_preview_segment(&mut self, from: Point, to: Point, visible: bool);

    fn draw_crosshair(&mut self, at: Point);
}

/// Draws the whole scene onto `out`.
///
/// Order: figure grids, figure outlines, preview path, vertex markers,
/// preview segment, crosshair.
pub fn render_scene<R: RenderAdapter + ?Sized>(scene: &PolylineScene, out: &mut R) {
    let registry = scene.registry();

    for figure in registry.figures() {
        out.draw_clipped_grid(figure.grid());
    }
    for figure in registry.figures() {
        out.draw_figure_outline(figure.polygon());
    }

    let path = scene.tool().path();
    out.draw_preview_path(path);

    for figure in registry.figures() {
        for vertex in figure.polygon().vertices() {
            out.draw_vertex_marker(*vertex);
        }
    }
    for vertex in path {
        out.draw_vertex_marker(*vertex);
    }

    match scene.preview_segment() {
        Some((from, to)) => out.draw_preview_segment(from, to, true),
        None => {
            let at = scene.cursor().unwrap_or_default();
            out.draw_preview_segment(at, at, false);
        }
    }

    if let Some(cursor) = scene.cursor() {
        out.draw_crosshair(cursor);
    }
}

/// A recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    ClippedGrid {
        bounds: Bounds,
        step: f64,
        segments: usize,
    },
    FigureOutline(Vec<Point>),
    PreviewPath(Vec<Point>),
    VertexMarker(Point),
    PreviewSegment {
        from: Point,
        to: Point,
        visible: bool,
    },
    Crosshair(Point),
}

/// Adapter that records draw calls instead of painting them.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Steps of every recorded grid, in draw order.
    pub fn grid_steps(&self) -> Vec<f64> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::ClippedGrid { step, .. } => Some(*step),
                _ => None,
            })
            .collect()
    }
}

impl RenderAdapter for DrawList {
    fn draw_clipped_grid(&mut self, grid: &ClippedGrid) {
        self.commands.push(DrawCommand::ClippedGrid {
            bounds: grid.bounds(),
            step: grid.step(),
            segments: grid.segments().len(),
        });
    }

    fn draw_figure_outline(&mut self, polygon: &Polygon) {
        self.commands
            .push(DrawCommand::FigureOutline(polygon.vertices().to_vec()));
    }

    fn draw_preview_path(&mut self, points: &[Point]) {
        self.commands.push(DrawCommand::PreviewPath(points.to_vec()));
    }

    fn draw_vertex_marker(&mut self, at: Point) {
        self.commands.push(DrawCommand::VertexMarker(at));
    }

    fn draw_preview_segment(&mut self, from: Point, to: Point, visible: bool) {
        self.commands
            .push(DrawCommand::PreviewSegment { from, to, visible });
    }

    fn draw_crosshair(&mut self, at: Point) {
        self.commands.push(DrawCommand::Crosshair(at));
    }
}
