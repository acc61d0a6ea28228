//! Top-level entry point for running the visualization as a native window.
//!
//! The [`run_geomprob`] function is the primary public API for launching the
//! application. It builds a [`GeomProbApp`] from the configuration, opens a
//! native window, and enters the eframe event loop.

use eframe::egui;

use crate::config::VizConfig;

use super::GeomProbApp;

/// Launch the visualization in a native window.
///
/// This is the main entry point for standalone use. It:
///
/// 1. Constructs a [`GeomProbApp`] and applies `cfg` (canvas geometry,
///    features, color scheme, stored view preferences).
/// 2. Opens a native window and enters the eframe event loop.
///
/// The call blocks until the window is closed.
pub fn run_geomprob(mut cfg: VizConfig) -> eframe::Result<()> {
    let title = cfg.title.clone();
    let mut opts = cfg
        .native_options
        .take()
        .unwrap_or_else(eframe::NativeOptions::default);

    // Try to set application icon from icon.svg if available.
    if opts.viewport.icon.is_none() {
        if let Some(icon) = load_app_icon_svg() {
            opts.viewport = opts.viewport.clone().with_icon(icon);
        }
    }

    // Default window size comfortably fits the canvas plus controls.
    if opts.viewport.inner_size.is_none() {
        opts.viewport = opts
            .viewport
            .clone()
            .with_inner_size(egui::vec2(800.0, 520.0));
    }

    let app = GeomProbApp::from_config(&cfg);

    eframe::run_native(
        &title,
        opts,
        Box::new(|cc| {
            // Install Phosphor icon font (sun/moon theme toggle) before
            // creating the app.
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    )
}

/// Attempt to load the project's `icon.svg` as an [`egui::IconData`].
///
/// Returns `None` if the file does not exist or cannot be parsed/rendered.
fn load_app_icon_svg() -> Option<egui::IconData> {
    let svg_path = concat!(env!("CARGO_MANIFEST_DIR"), "/icon.svg");
    let data = std::fs::read(svg_path).ok()?;

    let opt = usvg::Options::default();
    let tree = usvg::Tree::from_data(&data, &opt).ok()?;
    let size = tree.size().to_int_size();
    if size.width() == 0 || size.height() == 0 {
        return None;
    }
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())?;
    let mut canvas = pixmap.as_mut();
    resvg::render(&tree, tiny_skia::Transform::default(), &mut canvas);
    let rgba = pixmap.take();
    Some(egui::IconData {
        rgba,
        width: size.width(),
        height: size.height(),
    })
}
