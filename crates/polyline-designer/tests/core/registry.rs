use polyline_designer::{Axis, FigureRegistry, GridStep, Point, Polygon};

fn square(x: f64, y: f64, size: f64) -> Polygon {
    Polygon::new(vec![
        Point::new(x, y),
        Point::new(x + size, y),
        Point::new(x + size, y + size),
        Point::new(x, y + size),
    ])
    .unwrap()
}

#[test]
fn test_registry_starts_empty() {
    let registry = FigureRegistry::new(GridStep::new(12.5).unwrap());
    assert!(registry.is_empty());
    assert_eq!(registry.grid_step(), 12.5);
    assert_eq!(registry.figures().count(), 0);
}

#[test]
fn test_grid_step_propagates_to_all_figures() {
    let mut registry = FigureRegistry::default();
    let a = registry.add_figure(square(0.0, 0.0, 100.0));
    let b = registry.add_figure(square(200.0, 200.0, 50.0));

    assert!(registry.set_grid_step(25.0));
    assert_eq!(registry.grid_step(), 25.0);
    for id in [a, b] {
        assert_eq!(registry.get(id).unwrap().grid().step(), 25.0);
    }

    // The 100-unit square now has lines at 0, 25, 50, 75 along each axis
    assert_eq!(registry.get(a).unwrap().grid().segments().len(), 8);
}

#[test]
fn test_nearly_equal_step_is_ignored() {
    let mut registry = FigureRegistry::default();
    registry.add_figure(square(0.0, 0.0, 10.0));
    assert!(!registry.set_grid_step(10.0 + 1e-14));
    assert!(registry.set_grid_step(10.5));
    assert_eq!(registry.grid_step(), 10.5);
}

#[test]
fn test_figures_keep_creation_order() {
    let mut registry = FigureRegistry::default();
    let ids: Vec<_> = (0..4)
        .map(|i| registry.add_figure(square(i as f64 * 100.0, 0.0, 20.0)))
        .collect();
    let listed: Vec<_> = registry.figures().map(|f| f.id()).collect();
    assert_eq!(ids, listed);
    assert!(registry.figures().all(|f| f.vertex_count() == 4));
}

#[test]
fn test_too_fine_step_leaves_figures_untouched() {
    let mut registry = FigureRegistry::default();
    let a = registry.add_figure(square(0.0, 0.0, 100.0));
    let b = registry.add_figure(square(200.0, 0.0, 10.0));

    assert!(!registry.set_grid_step(1e-20));
    assert!(!registry.set_grid_step(1e-4));
    for id in [a, b] {
        assert_eq!(registry.get(id).unwrap().grid().step(), 10.0);
    }
    assert_eq!(registry.grid_step(), 10.0);
}

#[test]
fn test_fine_step_covers_whole_figure() {
    let mut registry = FigureRegistry::default();
    let id = registry.add_figure(square(0.0, 0.0, 100.0));

    assert!(registry.set_grid_step(0.01));
    let grid = registry.get(id).unwrap().grid();
    let max_x = grid
        .segments_along(Axis::Vertical)
        .map(|s| s.start.x)
        .fold(f64::MIN, f64::max);
    assert!(max_x > 99.0, "grid stops at x = {}", max_x);
}

#[test]
fn test_tiny_step_on_empty_registry() {
    let mut registry = FigureRegistry::default();
    assert!(registry.set_grid_step(1e-20));

    // Figures added later keep the current step; line generation is capped
    let id = registry.add_figure(square(0.0, 0.0, 1.0));
    assert_eq!(registry.get(id).unwrap().grid().step(), 1e-20);
}
