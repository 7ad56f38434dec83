//! Top-level entry point for running the ruler as a native window.
//!
//! [`run_ruler`] is the primary public API: it wires a frame source and a
//! configuration into a [`RulerApp`] and enters the eframe event loop. The
//! call blocks until the window closes or the frame source is exhausted.

use eframe::egui;

use crate::app::RulerApp;
use crate::config::RulerConfig;
use crate::session::RulerSession;
use crate::source::FrameSource;

/// Launch the ruler application in a native window.
pub fn run_ruler(source: Box<dyn FrameSource>, mut cfg: RulerConfig) -> eframe::Result<()> {
    let session = RulerSession::new(cfg.unit_label.clone(), cfg.reference_length);
    let hotkeys = cfg.effective_hotkeys();
    let app = RulerApp::new(source, session, cfg.theme.colors(), hotkeys);

    let title = cfg.title.clone();
    let mut opts = cfg
        .native_options
        .take()
        .unwrap_or_else(eframe::NativeOptions::default);

    if opts.viewport.icon.is_none() {
        if let Some(icon) = load_app_icon_svg() {
            opts.viewport = opts.viewport.clone().with_icon(icon);
        }
    }
    if opts.viewport.inner_size.is_none() {
        opts.viewport = opts.viewport.clone().with_inner_size(egui::vec2(1280.0, 800.0));
    }

    eframe::run_native(&title, opts, Box::new(|_cc| Ok(Box::new(app))))
}

/// Attempt to load the bundled `icon.svg` as an [`egui::IconData`].
///
/// Returns `None` if the file is missing or cannot be parsed/rendered.
fn load_app_icon_svg() -> Option<egui::IconData> {
    let svg_path = concat!(env!("CARGO_MANIFEST_DIR"), "/icon.svg");
    let data = std::fs::read(svg_path).ok()?;

    let tree = usvg::Tree::from_data(&data, &usvg::Options::default()).ok()?;
    let size = tree.size().to_int_size();
    if size.width() == 0 || size.height() == 0 {
        return None;
    }
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());
    Some(egui::IconData {
        rgba: pixmap.take(),
        width: size.width(),
        height: size.height(),
    })
}
