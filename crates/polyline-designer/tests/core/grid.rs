use polyline_designer::grid::{clip_grid, Axis, ClippedGrid, GridStep};
use polyline_designer::{Point, Polygon};
use proptest::prelude::*;

fn polygon(points: &[(f64, f64)]) -> Polygon {
    Polygon::new(points.iter().map(|&p| Point::from(p)).collect()).unwrap()
}

fn distance_to_segment(p: &Point, a: &Point, b: &Point) -> f64 {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        return p.distance_to(a);
    }
    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0);
    p.distance_to(&Point::new(a.x + t * dx, a.y + t * dy))
}

fn inside_or_on_edge(polygon: &Polygon, p: &Point) -> bool {
    polygon.contains(p)
        || polygon
            .edges()
            .any(|(a, b)| distance_to_segment(p, &a, &b) < 1e-6)
}

#[test]
fn test_grid_starts_at_bounding_box_corner() {
    let quad = polygon(&[(13.0, 7.0), (63.0, 7.0), (63.0, 37.0), (13.0, 37.0)]);
    let grid = ClippedGrid::new(quad, GridStep::new(10.0).unwrap());

    let xs: Vec<f64> = grid
        .segments_along(Axis::Vertical)
        .map(|s| s.start.x)
        .collect();
    assert_eq!(xs, vec![13.0, 23.0, 33.0, 43.0, 53.0]);

    let ys: Vec<f64> = grid
        .segments_along(Axis::Horizontal)
        .map(|s| s.start.y)
        .collect();
    assert_eq!(ys, vec![7.0, 17.0, 27.0]);
}

#[test]
fn test_step_larger_than_figure() {
    let small = polygon(&[(0.0, 0.0), (5.0, 0.0), (5.0, 5.0), (0.0, 5.0)]);
    let segments = clip_grid(&small, GridStep::new(100.0).unwrap());
    // Only the lines on the near edges remain
    assert_eq!(segments.len(), 2);
}

#[test]
fn test_grid_exposes_clip_shape() {
    let tri = polygon(&[(0.0, 0.0), (40.0, 0.0), (20.0, 30.0)]);
    let grid = ClippedGrid::new(tri.clone(), GridStep::default());
    assert_eq!(grid.clip(), &tri);
    assert_eq!(grid.bounds(), tri.bounds());
    assert_eq!(grid.step(), 10.0);
}

proptest! {
    #[test]
    fn prop_segments_stay_inside_triangle(
        ax in 0.0f64..500.0, ay in 0.0f64..500.0,
        bx in 0.0f64..500.0, by in 0.0f64..500.0,
        cx in 0.0f64..500.0, cy in 0.0f64..500.0,
        step in 1.0f64..50.0,
    ) {
        let tri = polygon(&[(ax, ay), (bx, by), (cx, cy)]);
        prop_assume!(tri.signed_area().abs() > 10.0);

        let bounds = tri.bounds();
        for seg in clip_grid(&tri, GridStep::new(step).unwrap()) {
            prop_assert!(seg.length() > 0.0);
            prop_assert!(inside_or_on_edge(&tri, &seg.midpoint()), "{:?} escapes {:?}", seg, tri);
            for end in [seg.start, seg.end] {
                prop_assert!(end.x >= bounds.min_x - 1e-6 && end.x <= bounds.max_x + 1e-6);
                prop_assert!(end.y >= bounds.min_y - 1e-6 && end.y <= bounds.max_y + 1e-6);
            }
        }
    }
}
