use polyline_designer::authoring::{AuthoringState, ClickOutcome, PolygonTool};
use polyline_designer::Point;
use proptest::prelude::*;

#[test]
fn test_tool_starts_idle() {
    let tool = PolygonTool::new();
    assert_eq!(tool.state(), &AuthoringState::Idle);
    assert!(tool.path().is_empty());
    assert_eq!(tool.close_threshold(), 10.0);
}

#[test]
fn test_cancel_from_any_length() {
    for n in 1..6 {
        let mut tool = PolygonTool::new();
        for i in 0..n {
            tool.primary_click(Point::new(100.0 * i as f64, 50.0 * (i % 2) as f64));
        }
        assert_eq!(tool.path().len(), n);
        assert_eq!(
            tool.secondary_click(Point::new(0.0, 0.0)),
            ClickOutcome::Cancelled { discarded: n }
        );
        assert!(!tool.is_authoring());
        assert!(tool.path().is_empty());
    }
}

#[test]
fn test_tool_is_reusable_after_close() {
    let mut tool = PolygonTool::new();
    for p in [(0.0, 0.0), (100.0, 0.0), (100.0, 100.0), (0.0, 0.0)] {
        tool.primary_click(Point::from(p));
    }
    assert!(!tool.is_authoring());

    assert_eq!(tool.primary_click(Point::new(300.0, 300.0)), ClickOutcome::Started);
    assert_eq!(tool.first_vertex(), Some(Point::new(300.0, 300.0)));
}

proptest! {
    // Vertices far from the start never close, so every click grows the path by one
    #[test]
    fn prop_path_grows_by_one(points in prop::collection::vec((20.0f64..1000.0, 20.0f64..1000.0), 1..40)) {
        let mut tool = PolygonTool::new();
        tool.primary_click(Point::new(0.0, 0.0));
        for (i, (x, y)) in points.iter().enumerate() {
            let before = tool.path().len();
            let outcome = tool.primary_click(Point::new(*x, *y));
            prop_assert_eq!(outcome, ClickOutcome::VertexAdded { count: before + 1 });
            prop_assert_eq!(tool.path().len(), i + 2);
        }
    }

    // A click within the threshold closes iff at least three vertices exist
    #[test]
    fn prop_close_requires_three_vertices(extra in 0usize..6, dx in -7.0f64..7.0, dy in -7.0f64..7.0) {
        let mut tool = PolygonTool::new();
        tool.primary_click(Point::new(500.0, 500.0));
        for i in 0..extra {
            tool.primary_click(Point::new(600.0 + 10.0 * i as f64, 700.0));
        }
        let len = tool.path().len();
        let outcome = tool.primary_click(Point::new(500.0 + dx, 500.0 + dy));
        if len >= 3 {
            prop_assert!(matches!(outcome, ClickOutcome::Closed(ref p) if p.len() == len));
            prop_assert!(!tool.is_authoring());
        } else {
            prop_assert_eq!(outcome, ClickOutcome::VertexAdded { count: len + 1 });
        }
    }
}
