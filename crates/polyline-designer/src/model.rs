//! Closed polygon model.

use lyon::math::point;
use lyon::path::Path;
use polyline_core::constants::MIN_FIGURE_VERTICES;
use polyline_core::{Bounds, Point};

use crate::error::{DesignerError, DesignerResult};

/// A closed polygon with at least three vertices.
///
/// The closing edge from the last vertex back to the first is implicit.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
    bounds: Bounds,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> DesignerResult<Self> {
        if vertices.len() < MIN_FIGURE_VERTICES {
            return Err(DesignerError::TooFewVertices {
                min: MIN_FIGURE_VERTICES,
                actual: vertices.len(),
            });
        }
        let bounds = Bounds::from_points(&vertices).ok_or(DesignerError::TooFewVertices {
            min: MIN_FIGURE_VERTICES,
            actual: 0,
        })?;
        Ok(Self { vertices, bounds })
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always false; kept alongside `len` for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn first(&self) -> Point {
        self.vertices[0]
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Edges as `(from, to)` pairs, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Even-odd point containment test.
    pub fn contains(&self, p: &Point) -> bool {
        if !self.bounds.contains(p) {
            return false;
        }
        let mut inside = false;
        for (a, b) in self.edges() {
            if (a.y > p.y) != (b.y > p.y) {
                let x_cross = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
                if p.x < x_cross {
                    inside = !inside;
                }
            }
        }
        inside
    }

    /// Signed shoelace area; positive for counter-clockwise winding.
    pub fn signed_area(&self) -> f64 {
        self.edges()
            .map(|(a, b)| a.x * b.y - b.x * a.y)
            .sum::<f64>()
            / 2.0
    }

    pub fn perimeter(&self) -> f64 {
        self.edges().map(|(a, b)| a.distance_to(&b)).sum()
    }

    /// Closed outline path for hosts that stroke `lyon` paths.
    pub fn to_path(&self) -> Path {
        path_from_points(&self.vertices, true)
    }
}

/// Builds a polyline path through `points`, optionally closing it.
///
/// An empty slice yields an empty path.
pub fn path_from_points(points: &[Point], closed: bool) -> Path {
    let mut builder = Path::builder();
    let mut iter = points.iter();
    if let Some(first) = iter.next() {
        builder.begin(point(first.x as f32, first.y as f32));
        for p in iter {
            builder.line_to(point(p.x as f32, p.y as f32));
        }
        builder.end(closed);
    }
    builder.build()
}
