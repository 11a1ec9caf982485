//! Clipped grid generation.
//!
//! A figure's grid is the set of axis-aligned lines covering the figure's
//! bounding rectangle at a fixed spacing, each cut down to the pieces that
//! fall inside the polygon (even-odd rule). The result is cached as a list of
//! segments and rebuilt only when the spacing actually changes.

use polyline_core::constants::DEFAULT_GRID_STEP;
use polyline_core::{fuzzy_compare, Bounds, Point};
use tracing::debug;

use crate::error::{DesignerError, DesignerResult};
use crate::model::Polygon;

/// Upper bound on grid lines generated per axis for one figure.
///
/// Steps that would need more lines are refused by the registry; see
/// [`step_fits`].
pub const MAX_LINES_PER_AXIS: usize = 100_000;

/// Absorbs rounding in `extent / step` so a line landing on the far edge is kept.
const LINE_COUNT_EPSILON: f64 = 1e-9;

/// Pieces shorter than this are dropped (tangent touches at vertices).
const MIN_SEGMENT_LENGTH: f64 = 1e-9;

/// Spacing between grid lines; always positive and finite.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct GridStep(f64);

impl GridStep {
    pub fn new(value: f64) -> DesignerResult<Self> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(DesignerError::InvalidGridStep(value))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// True when both steps are equal within floating point noise.
    pub fn approx_eq(self, other: GridStep) -> bool {
        fuzzy_compare(self.0, other.0)
    }
}

impl Default for GridStep {
    fn default() -> Self {
        Self(DEFAULT_GRID_STEP)
    }
}

impl TryFrom<f64> for GridStep {
    type Error = DesignerError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        GridStep::new(value)
    }
}

impl From<GridStep> for f64 {
    fn from(step: GridStep) -> Self {
        step.0
    }
}

/// Orientation of a grid line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Constant x, running along y.
    Vertical,
    /// Constant y, running along x.
    Horizontal,
}

/// One visible piece of a grid line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSegment {
    pub axis: Axis,
    pub start: Point,
    pub end: Point,
}

impl GridSegment {
    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    pub fn midpoint(&self) -> Point {
        self.start.midpoint(&self.end)
    }
}

/// Grid clipped to the interior of a polygon.
#[derive(Debug, Clone)]
pub struct ClippedGrid {
    clip: Polygon,
    step: GridStep,
    segments: Vec<GridSegment>,
}

impl ClippedGrid {
    pub fn new(clip: Polygon, step: GridStep) -> Self {
        let segments = clip_grid(&clip, step);
        Self {
            clip,
            step,
            segments,
        }
    }

    /// Changes the spacing and rebuilds the segments.
    ///
    /// Returns `false` without doing any work when `step` is fuzzily equal to
    /// the current spacing.
    pub fn set_step(&mut self, step: GridStep) -> bool {
        if self.step.approx_eq(step) {
            return false;
        }
        self.step = step;
        self.segments = clip_grid(&self.clip, step);
        debug!(
            step = step.value(),
            segments = self.segments.len(),
            "Rebuilt clipped grid"
        );
        true
    }

    pub fn step(&self) -> f64 {
        self.step.value()
    }

    /// The shape the grid is clipped to.
    pub fn clip(&self) -> &Polygon {
        &self.clip
    }

    /// The rectangle the unclipped grid covers.
    pub fn bounds(&self) -> Bounds {
        self.clip.bounds()
    }

    pub fn segments(&self) -> &[GridSegment] {
        &self.segments
    }

    pub fn segments_along(&self, axis: Axis) -> impl Iterator<Item = &GridSegment> + '_ {
        self.segments.iter().filter(move |s| s.axis == axis)
    }
}

/// Computes the grid segments of `polygon` at `step` spacing.
///
/// Vertical lines sit at `min_x + i * step` and horizontal lines at
/// `min_y + j * step`, for every offset not beyond the far edge of the
/// polygon's bounding rectangle.
pub fn clip_grid(polygon: &Polygon, step: GridStep) -> Vec<GridSegment> {
    let bounds = polygon.bounds();
    let step = step.value();
    let mut segments = Vec::new();

    for i in 0..line_count(bounds.width(), step) {
        let x = bounds.min_x + i as f64 * step;
        for (y0, y1) in interior_spans(polygon, Axis::Vertical, x) {
            segments.push(GridSegment {
                axis: Axis::Vertical,
                start: Point::new(x, y0),
                end: Point::new(x, y1),
            });
        }
    }

    for j in 0..line_count(bounds.height(), step) {
        let y = bounds.min_y + j as f64 * step;
        for (x0, x1) in interior_spans(polygon, Axis::Horizontal, y) {
            segments.push(GridSegment {
                axis: Axis::Horizontal,
                start: Point::new(x0, y),
                end: Point::new(x1, y),
            });
        }
    }

    segments
}

/// Whether a grid at `step` over `bounds` stays within the per-axis line cap.
pub fn step_fits(bounds: &Bounds, step: GridStep) -> bool {
    let limit = MAX_LINES_PER_AXIS as f64;
    raw_line_count(bounds.width(), step.value()) <= limit
        && raw_line_count(bounds.height(), step.value()) <= limit
}

fn raw_line_count(extent: f64, step: f64) -> f64 {
    (extent / step + LINE_COUNT_EPSILON).floor() + 1.0
}

fn line_count(extent: f64, step: f64) -> usize {
    raw_line_count(extent, step).min(MAX_LINES_PER_AXIS as f64) as usize
}

/// Intervals of the line at `offset` that lie inside the polygon.
///
/// For a vertical line `offset` is an x coordinate and the spans are y
/// ranges; for a horizontal line it is the other way round.
fn interior_spans(polygon: &Polygon, axis: Axis, offset: f64) -> Vec<(f64, f64)> {
    let project = |p: &Point| match axis {
        Axis::Vertical => (p.x, p.y),
        Axis::Horizontal => (p.y, p.x),
    };

    let mut crossings: Vec<f64> = polygon
        .edges()
        .filter_map(|(a, b)| {
            let (au, av) = project(&a);
            let (bu, bv) = project(&b);
            // Half-open test: a vertex shared by two edges is counted once
            let crosses = (au <= offset && offset < bu) || (bu <= offset && offset < au);
            crosses.then(|| av + (offset - au) * (bv - av) / (bu - au))
        })
        .collect();
    crossings.sort_by(|a, b| a.total_cmp(b));

    crossings
        .chunks_exact(2)
        .map(|pair| (pair[0], pair[1]))
        .filter(|(lo, hi)| hi - lo > MIN_SEGMENT_LENGTH)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn polygon(points: &[(f64, f64)]) -> Polygon {
        Polygon::new(points.iter().map(|&p| Point::from(p)).collect()).unwrap()
    }

    #[test]
    fn test_grid_step_validation() {
        assert!(GridStep::new(10.0).is_ok());
        assert_eq!(
            GridStep::new(0.0),
            Err(DesignerError::InvalidGridStep(0.0))
        );
        assert!(GridStep::new(-5.0).is_err());
        assert!(GridStep::new(f64::NAN).is_err());
        assert!(GridStep::new(f64::INFINITY).is_err());
        assert_eq!(GridStep::default().value(), 10.0);
    }

    #[test]
    fn test_line_count() {
        assert_eq!(line_count(100.0, 10.0), 11);
        assert_eq!(line_count(95.0, 10.0), 10);
        assert_eq!(line_count(0.0, 10.0), 1);
        assert_eq!(line_count(0.3, 0.1), 4);
        assert_eq!(line_count(1e12, 1e-3), MAX_LINES_PER_AXIS);
        assert_eq!(line_count(100.0, 1e-20), MAX_LINES_PER_AXIS);
        assert_eq!(line_count(100.0, f64::MIN_POSITIVE), MAX_LINES_PER_AXIS);
    }

    #[test]
    fn test_step_fits() {
        let bounds = Bounds::new(0.0, 0.0, 100.0, 100.0);
        assert!(step_fits(&bounds, GridStep::new(0.01).unwrap()));
        assert!(!step_fits(&bounds, GridStep::new(1e-4).unwrap()));
        assert!(!step_fits(&bounds, GridStep::new(1e-20).unwrap()));

        // A flat box only needs one line along its thin axis
        let flat = Bounds::new(0.0, 0.0, 100.0, 0.0);
        assert!(step_fits(&flat, GridStep::new(0.01).unwrap()));
    }

    #[test]
    fn test_tiny_step_does_not_overflow() {
        let sq = polygon(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        let grid = ClippedGrid::new(sq, GridStep::new(1e-300).unwrap());
        assert!(grid.segments().len() <= 2 * MAX_LINES_PER_AXIS);
    }

    #[test]
    fn test_square_grid() {
        let sq = polygon(&[(0.0, 0.0), (100.0, 0.0), (100.0, 100.0), (0.0, 100.0)]);
        let grid = ClippedGrid::new(sq, GridStep::new(10.0).unwrap());

        // x = 0..=90 produce full-height spans; x = 100 is the far edge and
        // has no interior
        let vertical: Vec<_> = grid.segments_along(Axis::Vertical).collect();
        assert_eq!(vertical.len(), 10);
        for seg in &vertical {
            assert_eq!(seg.start.y, 0.0);
            assert_eq!(seg.end.y, 100.0);
        }
        assert_eq!(grid.segments_along(Axis::Horizontal).count(), 10);
    }

    #[test]
    fn test_triangle_segments_stay_inside() {
        let tri = polygon(&[(0.0, 0.0), (100.0, 0.0), (100.0, 100.0)]);
        let grid = ClippedGrid::new(tri.clone(), GridStep::new(10.0).unwrap());
        assert!(!grid.segments().is_empty());
        for seg in grid.segments() {
            assert!(tri.contains(&seg.midpoint()), "{:?} escapes", seg);
        }

        // Vertical line at x = 50 runs from the bottom edge up to the diagonal
        let at_50 = grid
            .segments_along(Axis::Vertical)
            .find(|s| s.start.x == 50.0)
            .unwrap();
        assert_eq!(at_50.start.y, 0.0);
        assert_eq!(at_50.end.y, 50.0);
    }

    #[test]
    fn test_concave_polygon_splits_lines() {
        // U shape: horizontal lines through the notch are split in two
        let u = polygon(&[
            (0.0, 0.0),
            (30.0, 0.0),
            (30.0, 30.0),
            (20.0, 30.0),
            (20.0, 10.0),
            (10.0, 10.0),
            (10.0, 30.0),
            (0.0, 30.0),
        ]);
        let grid = ClippedGrid::new(u.clone(), GridStep::new(5.0).unwrap());
        let at_20: Vec<_> = grid
            .segments_along(Axis::Horizontal)
            .filter(|s| s.start.y == 20.0)
            .collect();
        assert_eq!(at_20.len(), 2);
        assert_eq!((at_20[0].start.x, at_20[0].end.x), (0.0, 10.0));
        assert_eq!((at_20[1].start.x, at_20[1].end.x), (20.0, 30.0));
        for seg in grid.segments() {
            assert!(u.contains(&seg.midpoint()));
        }
    }

    #[test]
    fn test_set_step_rebuilds() {
        let sq = polygon(&[(0.0, 0.0), (100.0, 0.0), (100.0, 100.0), (0.0, 100.0)]);
        let mut grid = ClippedGrid::new(sq, GridStep::new(10.0).unwrap());
        let before = grid.segments().len();

        assert!(!grid.set_step(GridStep::new(10.0).unwrap()));
        assert_eq!(grid.segments().len(), before);

        assert!(grid.set_step(GridStep::new(25.0).unwrap()));
        assert_eq!(grid.step(), 25.0);
        // x = 0, 25, 50, 75 inside; 100 on the far edge
        assert_eq!(grid.segments_along(Axis::Vertical).count(), 4);
    }

    #[test]
    fn test_degenerate_polygon_has_no_segments() {
        let flat = polygon(&[(0.0, 0.0), (50.0, 0.0), (100.0, 0.0)]);
        let grid = ClippedGrid::new(flat, GridStep::default());
        assert!(grid.segments().is_empty());
    }
}
