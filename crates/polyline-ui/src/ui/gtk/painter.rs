//! Cairo implementation of the scene render adapter.

use gtk4::cairo::Context;
use lyon::path::{Path, PathEvent};
use polyline_core::constants::{CROSSHAIR_HALF, VERTEX_MARKER_RADIUS};
use polyline_designer::model::path_from_points;
use polyline_designer::{ClippedGrid, Point, Polygon, RenderAdapter};

/// RGB color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb(pub f64, pub f64, pub f64);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0.0, 0.0, 0.0);
    pub const GRAY: Rgb = Rgb(0.627, 0.627, 0.643);
    pub const RED: Rgb = Rgb(1.0, 0.0, 0.0);
    pub const BLUE: Rgb = Rgb(0.0, 0.0, 1.0);
}

/// Pens and brushes used to paint the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct PaintStyle {
    pub grid_color: Rgb,
    pub grid_dash: Vec<f64>,
    pub outline_color: Rgb,
    pub line_width: f64,
    pub preview_dash: Vec<f64>,
    pub marker_color: Rgb,
    pub marker_radius: f64,
    pub crosshair_color: Rgb,
    pub crosshair_half: f64,
}

impl Default for PaintStyle {
    fn default() -> Self {
        Self {
            grid_color: Rgb::GRAY,
            grid_dash: vec![1.0, 2.0],
            outline_color: Rgb::BLACK,
            line_width: 1.0,
            preview_dash: vec![4.0, 2.0],
            marker_color: Rgb::RED,
            marker_radius: VERTEX_MARKER_RADIUS,
            crosshair_color: Rgb::BLUE,
            crosshair_half: CROSSHAIR_HALF,
        }
    }
}

/// Paints scene draw calls onto a cairo context in scene coordinates.
pub struct CairoPainter<'a> {
    cr: &'a Context,
    style: PaintStyle,
}

impl<'a> CairoPainter<'a> {
    pub fn new(cr: &'a Context) -> Self {
        Self::with_style(cr, PaintStyle::default())
    }

    pub fn with_style(cr: &'a Context, style: PaintStyle) -> Self {
        Self { cr, style }
    }

    pub fn style(&self) -> &PaintStyle {
        &self.style
    }

    fn set_color(&self, color: Rgb) {
        self.cr.set_source_rgb(color.0, color.1, color.2);
    }

    fn trace_path(&self, path: &Path) {
        let cr = self.cr;
        for event in path.iter() {
            match event {
                PathEvent::Begin { at } => cr.move_to(at.x as f64, at.y as f64),
                PathEvent::Line { to, .. }
                | PathEvent::Quadratic { to, .. }
                | PathEvent::Cubic { to, .. } => cr.line_to(to.x as f64, to.y as f64),
                PathEvent::End { close, .. } => {
                    if close {
                        cr.close_path();
                    }
                }
            }
        }
    }

    fn stroke_path(&self, path: &Path) {
        let cr = self.cr;
        let _ = cr.save();
        self.set_color(self.style.outline_color);
        cr.set_line_width(self.style.line_width);
        cr.set_dash(&[], 0.0);
        self.trace_path(path);
        let _ = cr.stroke();
        let _ = cr.restore();
    }
}

impl RenderAdapter for CairoPainter<'_> {
    fn draw_clipped_grid(&mut self, grid: &ClippedGrid) {
        let cr = self.cr;
        let _ = cr.save();
        self.set_color(self.style.grid_color);
        cr.set_line_width(self.style.line_width);
        cr.set_dash(&self.style.grid_dash, 0.0);
        for segment in grid.segments() {
            cr.move_to(segment.start.x, segment.start.y);
            cr.line_to(segment.end.x, segment.end.y);
        }
        let _ = cr.stroke();
        let _ = cr.restore();
    }

    fn draw_figure_outline(&mut self, polygon: &Polygon) {
        self.stroke_path(&polygon.to_path());
    }

    fn draw_preview_path(&mut self, points: &[Point]) {
        if points.len() < 2 {
            return;
        }
        self.stroke_path(&path_from_points(points, false));
    }

    fn draw_vertex_marker(&mut self, at: Point) {
        let cr = self.cr;
        let _ = cr.save();
        self.set_color(self.style.marker_color);
        cr.new_sub_path();
        cr.arc(
            at.x,
            at.y,
            self.style.marker_radius,
            0.0,
            2.0 * std::f64::consts::PI,
        );
        let _ = cr.fill();
        let _ = cr.restore();
    }

    fn draw_preview_segment(&mut self, from: Point, to: Point, visible: bool) {
        if !visible {
            return;
        }
        let cr = self.cr;
        let _ = cr.save();
        self.set_color(self.style.outline_color);
        cr.set_line_width(self.style.line_width);
        cr.set_dash(&self.style.preview_dash, 0.0);
        cr.move_to(from.x, from.y);
        cr.line_to(to.x, to.y);
        let _ = cr.stroke();
        let _ = cr.restore();
    }

    fn draw_crosshair(&mut self, at: Point) {
        let cr = self.cr;
        let half = self.style.crosshair_half;
        let _ = cr.save();
        self.set_color(self.style.crosshair_color);
        cr.set_line_width(self.style.line_width);
        cr.set_dash(&[], 0.0);
        cr.move_to(at.x - half, at.y);
        cr.line_to(at.x + half, at.y);
        cr.move_to(at.x, at.y - half);
        cr.line_to(at.x, at.y + half);
        let _ = cr.stroke();
        let _ = cr.restore();
    }
}
