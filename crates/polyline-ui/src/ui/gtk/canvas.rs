//! Polyline Canvas - drawing area and pointer handling for the scene
//!
//! Widget coordinates map one to one onto scene coordinates; the drawing
//! area is sized to the scene rectangle and scrolled by its parent.

use gtk4::prelude::*;
use gtk4::{DrawingArea, EventControllerKey, EventControllerMotion, GestureClick};
use polyline_designer::{render_scene, Point, PointerEvent, PolylineScene, SceneChange};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

use super::painter::CairoPainter;

#[derive(Clone)]
pub struct PolylineCanvas {
    pub widget: DrawingArea,
    pub scene: Rc<RefCell<PolylineScene>>,
}

impl PolylineCanvas {
    pub fn new(scene: Rc<RefCell<PolylineScene>>) -> Rc<Self> {
        let bounds = scene.borrow().bounds();
        let widget = DrawingArea::builder()
            .content_width(bounds.width().ceil() as i32)
            .content_height(bounds.height().ceil() as i32)
            .focusable(true)
            .css_classes(vec!["polyline-canvas"])
            .build();

        let scene_draw = scene.clone();
        widget.set_draw_func(move |_area, cr, _width, _height| {
            cr.set_source_rgb(1.0, 1.0, 1.0);
            let _ = cr.paint();

            let scene = scene_draw.borrow();
            render_scene(&scene, &mut CairoPainter::new(cr));
        });

        let canvas = Rc::new(Self {
            widget: widget.clone(),
            scene,
        });

        // Mouse motion tracking
        let motion_ctrl = EventControllerMotion::new();
        let canvas_motion = canvas.clone();
        motion_ctrl.connect_motion(move |_, x, y| {
            canvas_motion.dispatch(PointerEvent::Move(Point::new(x, y)));
        });
        widget.add_controller(motion_ctrl);

        // Left click places vertices
        let click_gesture = GestureClick::new();
        click_gesture.set_button(1);
        let canvas_click = canvas.clone();
        click_gesture.connect_pressed(move |_gesture, _n_press, x, y| {
            canvas_click.widget.grab_focus();
            canvas_click.dispatch(PointerEvent::Primary(Point::new(x, y)));
        });
        widget.add_controller(click_gesture);

        // Right click cancels the path in progress
        let right_click_gesture = GestureClick::new();
        right_click_gesture.set_button(3);
        let canvas_right_click = canvas.clone();
        right_click_gesture.connect_pressed(move |_gesture, _n_press, x, y| {
            canvas_right_click.dispatch(PointerEvent::Secondary(Point::new(x, y)));
        });
        widget.add_controller(right_click_gesture);

        let key_controller = EventControllerKey::new();
        let canvas_key = canvas.clone();
        key_controller.connect_key_pressed(move |_controller, keyval, _keycode, _modifier| {
            if keyval == gtk4::gdk::Key::Escape {
                let change = canvas_key.scene.borrow_mut().cancel();
                if change.needs_redraw() {
                    canvas_key.widget.queue_draw();
                    return glib::Propagation::Stop;
                }
            }
            glib::Propagation::Proceed
        });
        widget.add_controller(key_controller);

        canvas
    }

    /// Feeds a pointer event to the scene and repaints if it changed.
    pub fn dispatch(&self, event: PointerEvent) -> SceneChange {
        let change = self.scene.borrow_mut().handle(event);
        if let SceneChange::FigureAdded(id) = change {
            debug!(%id, "Canvas figure added");
        }
        if change.needs_redraw() {
            self.widget.queue_draw();
        }
        change
    }

    /// Applies a new grid step to every figure.
    pub fn set_grid_step(&self, step: f64) -> SceneChange {
        let change = self.scene.borrow_mut().set_grid_step(step);
        if change.needs_redraw() {
            self.widget.queue_draw();
        }
        change
    }

    pub fn queue_draw(&self) {
        self.widget.queue_draw();
    }
}
