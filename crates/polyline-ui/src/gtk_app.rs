use gtk4::prelude::*;
use gtk4::{ApplicationWindow, Box, CssProvider, HeaderBar, Orientation, PolicyType, ScrolledWindow};
use libadwaita::prelude::*;
use libadwaita::{Application as AdwApplication, ColorScheme, StyleManager};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, info, warn};

use polyline_designer::{GridStep, PolylineScene};
use polyline_settings::{SettingsManager, Theme};

use crate::ui::gtk::canvas::PolylineCanvas;
use crate::ui::gtk::ribbon::Ribbon;

pub const APP_ID: &str = "io.github.polyline_editor.PolylineEditor";
pub const WINDOW_TITLE: &str = "Polyline Editor";

pub fn main() -> glib::ExitCode {
    let app = AdwApplication::builder().application_id(APP_ID).build();

    app.connect_startup(|_| {
        load_css();
    });

    app.connect_activate(|app| {
        let config = Rc::new(RefCell::new(SettingsManager::load_user_config()));
        apply_theme(config.borrow().ui.theme);

        let step = GridStep::new(config.borrow().editor.grid_step).unwrap_or_else(|e| {
            warn!("{}; using default grid step", e);
            GridStep::default()
        });
        let scene = Rc::new(RefCell::new(PolylineScene::new(step)));

        // Build UI
        let (width, height) = config.borrow().ui.window_size();
        let window = ApplicationWindow::builder()
            .application(app)
            .title(WINDOW_TITLE)
            .default_width(width)
            .default_height(height)
            .build();

        let header = HeaderBar::new();
        window.set_titlebar(Some(&header));

        let main_box = Box::new(Orientation::Vertical, 0);

        let ribbon = Ribbon::new(step.value());
        main_box.append(&ribbon.widget);

        let canvas = PolylineCanvas::new(scene.clone());
        let scroller = ScrolledWindow::builder()
            .hscrollbar_policy(PolicyType::Automatic)
            .vscrollbar_policy(PolicyType::Automatic)
            .hexpand(true)
            .vexpand(true)
            .child(&canvas.widget)
            .build();
        main_box.append(&scroller);

        let canvas_step = canvas.clone();
        let config_step = config.clone();
        ribbon.connect_grid_step_changed(move |value| {
            if !canvas_step.set_grid_step(value).needs_redraw() {
                return;
            }
            let mut config = config_step.borrow_mut();
            config.set_grid_step(value);
            if let Err(e) = SettingsManager::save_user_config(&config) {
                warn!("Failed to save settings: {}", e);
            }
        });

        window.set_child(Some(&main_box));

        info!(
            width,
            height,
            grid_step = step.value(),
            "Main window ready"
        );
        window.present();
    });

    app.run()
}

fn apply_theme(theme: Theme) {
    let scheme = match theme {
        Theme::System => ColorScheme::Default,
        Theme::Light => ColorScheme::ForceLight,
        Theme::Dark => ColorScheme::ForceDark,
    };
    debug!(%theme, "Applying color scheme");
    StyleManager::default().set_color_scheme(scheme);
}

fn load_css() {
    let provider = CssProvider::new();
    provider.load_from_data(include_str!("ui/gtk/style.css"));

    match gtk4::gdk::Display::default() {
        Some(display) => gtk4::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
        ),
        None => warn!("No display available; skipping stylesheet"),
    }
}
