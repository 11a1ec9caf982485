//! Ribbon toolbar above the canvas.
//!
//! One tab ("Rail") with a "Grid" group holding the grid step control.

use gtk4::prelude::*;
use gtk4::{Box, Frame, Label, Orientation, SpinButton, Stack, StackSwitcher};
use polyline_core::constants::{GRID_STEP_MAX, GRID_STEP_MIN};

/// Increment of the grid step spin button.
pub const GRID_STEP_INCREMENT: f64 = 1.0;
/// Decimal places shown by the grid step spin button.
pub const GRID_STEP_DIGITS: u32 = 1;

pub struct Ribbon {
    pub widget: Box,
    pub grid_step: SpinButton,
}

impl Ribbon {
    pub fn new(initial_step: f64) -> Self {
        let widget = Box::new(Orientation::Vertical, 0);
        widget.add_css_class("ribbon");

        let stack = Stack::new();
        let stack_switcher = StackSwitcher::new();
        stack_switcher.set_stack(Some(&stack));
        stack_switcher.set_halign(gtk4::Align::Start);

        let rail = Box::new(Orientation::Horizontal, 6);

        let grid_group = Frame::new(Some("Grid"));
        grid_group.add_css_class("ribbon-group");
        let grid_row = Box::new(Orientation::Horizontal, 6);
        grid_row.set_margin_start(6);
        grid_row.set_margin_end(6);
        grid_row.set_margin_top(4);
        grid_row.set_margin_bottom(4);

        let grid_step =
            SpinButton::with_range(GRID_STEP_MIN, GRID_STEP_MAX, GRID_STEP_INCREMENT);
        grid_step.set_digits(GRID_STEP_DIGITS);
        grid_step.set_value(clamp_step(initial_step));
        grid_step.set_tooltip_text(Some("Spacing of the grid drawn inside figures"));

        grid_row.append(&Label::new(Some("Step:")));
        grid_row.append(&grid_step);
        grid_group.set_child(Some(&grid_row));
        rail.append(&grid_group);

        stack.add_titled(&rail, Some("rail"), "Rail");

        widget.append(&stack_switcher);
        widget.append(&stack);

        Self { widget, grid_step }
    }

    /// Calls `f` with the new step whenever the user edits it.
    pub fn connect_grid_step_changed<F: Fn(f64) + 'static>(&self, f: F) {
        self.grid_step.connect_value_changed(move |spin| f(spin.value()));
    }
}

/// Grid step as the spin button would hold it.
pub fn clamp_step(step: f64) -> f64 {
    if step.is_finite() {
        step.clamp(GRID_STEP_MIN, GRID_STEP_MAX)
    } else {
        polyline_core::constants::DEFAULT_GRID_STEP
    }
}
