//! The eframe application: frame ingestion, input mapping, and overlay
//! painting.
//!
//! This is the render/input adapter around the core state machine. It pulls
//! frames from a [`FrameSource`], uploads them as an egui texture, translates
//! pointer clicks into frame coordinates and key presses into
//! [`RulerAction`]s, and rasterizes the declarative overlay produced by
//! [`crate::draw::overlay`]. The session itself never sees egui types.

use std::time::Duration;

use eframe::egui;
use egui::{Align2, Color32, ColorImage, FontId, Pos2, Rect, Sense, Stroke, TextureHandle};

use crate::color_scheme::OverlayColors;
use crate::draw::{overlay, Drawable, Rgb};
use crate::hotkeys::{Hotkey, Hotkeys, KeySpec, Modifier};
use crate::session::{Flow, RulerAction, RulerSession};
use crate::source::{FramePoll, FrameSource};
use crate::Point;

/// Commands produced by the input layer: either a session action or an
/// app-level operation with no session counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppCommand {
    Ruler(RulerAction),
    SaveSnapshot,
}

/// Interactive ruler window over a live frame stream.
pub struct RulerApp {
    source: Box<dyn FrameSource>,
    session: RulerSession,
    colors: OverlayColors,
    hotkeys: Hotkeys,
    texture: Option<TextureHandle>,
    frame_size: [u32; 2],
    request_snapshot: bool,
    closing: bool,
}

impl RulerApp {
    pub fn new(
        source: Box<dyn FrameSource>,
        session: RulerSession,
        colors: OverlayColors,
        hotkeys: Hotkeys,
    ) -> Self {
        Self {
            source,
            session,
            colors,
            hotkeys,
            texture: None,
            frame_size: [0, 0],
            request_snapshot: false,
            closing: false,
        }
    }

    pub fn session(&self) -> &RulerSession {
        &self.session
    }

    /// Drain the source down to the most recent frame and upload it.
    /// An exhausted source ends the session on the next update pass.
    fn ingest_frames(&mut self, ctx: &egui::Context) {
        let mut latest = None;
        loop {
            match self.source.poll_frame() {
                FramePoll::Frame(f) => latest = Some(f),
                FramePoll::Pending => break,
                FramePoll::End => {
                    log::info!("frame source exhausted, ending session");
                    self.closing = true;
                    break;
                }
            }
        }
        if let Some(frame) = latest {
            self.frame_size = frame.size();
            let image = ColorImage::from_rgb(
                [frame.width as usize, frame.height as usize],
                &frame.rgb,
            );
            match &mut self.texture {
                Some(tex) => tex.set(image, egui::TextureOptions::LINEAR),
                None => {
                    self.texture =
                        Some(ctx.load_texture("video-frame", image, egui::TextureOptions::LINEAR));
                }
            }
        }
    }

    /// Collect the commands triggered by this frame's key events.
    fn detect_commands(&self, ctx: &egui::Context) -> Vec<AppCommand> {
        ctx.input(|input| {
            let mut out = Vec::new();
            for ev in &input.events {
                match ev {
                    egui::Event::Key {
                        key,
                        pressed: true,
                        repeat: false,
                        modifiers,
                        ..
                    } => {
                        let spec = match key {
                            egui::Key::Enter => KeySpec::Enter,
                            egui::Key::Escape => KeySpec::Escape,
                            _ => continue,
                        };
                        if let Some(modifier) = modifier_of(*modifiers) {
                            if let Some(cmd) = self.command_for(spec, modifier) {
                                out.push(cmd);
                            }
                        }
                    }
                    egui::Event::Text(text) => {
                        let Some(modifier) = modifier_of(input.modifiers) else {
                            continue;
                        };
                        for ch in text.chars() {
                            if let Some(cmd) = self.command_for(KeySpec::Char(ch), modifier) {
                                out.push(cmd);
                            }
                        }
                    }
                    _ => {}
                }
            }
            out
        })
    }

    fn command_for(&self, key: KeySpec, modifier: Modifier) -> Option<AppCommand> {
        let hk = &self.hotkeys;
        let bindings = [
            (hk.clear_pending, AppCommand::Ruler(RulerAction::ClearPending)),
            (hk.clear_all, AppCommand::Ruler(RulerAction::ClearAll)),
            (hk.calibrate, AppCommand::Ruler(RulerAction::EnterCalibration)),
            (hk.toggle_units, AppCommand::Ruler(RulerAction::ToggleUnits)),
            (
                hk.confirm_calibration,
                AppCommand::Ruler(RulerAction::ConfirmCalibration),
            ),
            (
                hk.increase_reference,
                AppCommand::Ruler(RulerAction::IncreaseReference),
            ),
            (
                hk.decrease_reference,
                AppCommand::Ruler(RulerAction::DecreaseReference),
            ),
            (hk.save_snapshot, AppCommand::SaveSnapshot),
            (hk.quit, AppCommand::Ruler(RulerAction::Quit)),
        ];
        bindings
            .into_iter()
            .find(|(binding, _)| hotkey_matches(binding, key, modifier))
            .map(|(_, cmd)| cmd)
    }

    /// Paint the frame texture plus overlay, and route clicks to the session.
    fn show_frame(&mut self, ui: &mut egui::Ui) {
        let tex = match &self.texture {
            Some(tex) => tex.clone(),
            None => {
                ui.centered_and_justified(|ui| {
                    ui.label("Waiting for first frame…");
                });
                return;
            }
        };

        let [fw, fh] = self.frame_size;
        let avail = ui.available_size();
        let scale = (avail.x / fw as f32)
            .min(avail.y / fh as f32)
            .max(f32::EPSILON);
        let size = egui::vec2(fw as f32 * scale, fh as f32 * scale);
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());

        let painter = ui.painter_at(rect);
        painter.image(
            tex.id(),
            rect,
            Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            Color32::WHITE,
        );

        // Clicks are mapped back into integer frame coordinates before they
        // reach the state machine.
        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let fx = ((pos.x - rect.left()) / scale).floor() as i32;
                let fy = ((pos.y - rect.top()) / scale).floor() as i32;
                let p = Point::new(
                    fx.clamp(0, fw as i32 - 1),
                    fy.clamp(0, fh as i32 - 1),
                );
                self.session.handle_click(p);
            }
        }

        let to_screen =
            |p: Point| Pos2::new(rect.left() + p.x as f32 * scale, rect.top() + p.y as f32 * scale);
        for drawable in overlay(&self.session, self.frame_size, &self.colors) {
            match drawable {
                Drawable::Line {
                    from,
                    to,
                    color,
                    width,
                } => {
                    painter.line_segment(
                        [to_screen(from), to_screen(to)],
                        Stroke::new(width, to_color32(color)),
                    );
                }
                Drawable::Marker { at, radius, color } => {
                    painter.circle_filled(to_screen(at), radius, to_color32(color));
                }
                Drawable::Label {
                    at,
                    text,
                    color,
                    size,
                } => {
                    painter.text(
                        to_screen(at),
                        Align2::LEFT_BOTTOM,
                        text,
                        FontId::proportional(size),
                        to_color32(color),
                    );
                }
            }
        }
    }

    /// Save the latest viewport screenshot delivered by egui, if any.
    fn handle_screenshot_events(&mut self, ctx: &egui::Context) {
        let image = ctx.input(|i| {
            i.events.iter().rev().find_map(|e| {
                if let egui::Event::Screenshot { image, .. } = e {
                    Some(image.clone())
                } else {
                    None
                }
            })
        });
        let Some(shot) = image else { return };

        let default_name = format!(
            "frameruler_{}.png",
            chrono::Local::now().format("%Y%m%d_%H%M%S")
        );
        let Some(path) = rfd::FileDialog::new().set_file_name(&default_name).save_file() else {
            return;
        };
        let [w, h] = shot.size;
        let mut out = image::RgbaImage::new(w as u32, h as u32);
        for y in 0..h {
            for x in 0..w {
                let p = shot.pixels[y * w + x];
                out.put_pixel(x as u32, y as u32, image::Rgba([p.r(), p.g(), p.b(), p.a()]));
            }
        }
        match out.save(&path) {
            Ok(()) => log::info!("saved snapshot to {:?}", path),
            Err(e) => log::warn!("failed to save snapshot to {:?}: {}", path, e),
        }
    }
}

impl eframe::App for RulerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ingest_frames(ctx);

        for cmd in self.detect_commands(ctx) {
            match cmd {
                AppCommand::Ruler(action) => {
                    if self.session.apply(action) == Flow::Quit {
                        self.closing = true;
                    }
                }
                AppCommand::SaveSnapshot => self.request_snapshot = true,
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_frame(ui);
        });

        if self.request_snapshot {
            self.request_snapshot = false;
            // The result arrives later as Event::Screenshot.
            ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot(Default::default()));
        }
        self.handle_screenshot_events(ctx);

        if self.closing {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        // Keep pulling frames even without input events.
        ctx.request_repaint_after(Duration::from_millis(16));
    }
}

fn to_color32(c: Rgb) -> Color32 {
    Color32::from_rgb(c.r, c.g, c.b)
}

/// Map egui modifier state onto the hotkey modifier set. Command is treated
/// as Ctrl so bindings behave the same on macOS; combinations the hotkey set
/// cannot express match nothing.
fn modifier_of(m: egui::Modifiers) -> Option<Modifier> {
    let ctrl = m.ctrl || m.command;
    match (ctrl, m.alt, m.shift) {
        (false, false, false) => Some(Modifier::None),
        (true, false, false) => Some(Modifier::Ctrl),
        (false, true, false) => Some(Modifier::Alt),
        (false, false, true) => Some(Modifier::Shift),
        (true, false, true) => Some(Modifier::CtrlShift),
        _ => None,
    }
}

/// Check a key event against one binding. For printable keys Shift is part
/// of the produced character, so a plain binding still matches shifted input.
fn hotkey_matches(binding: &Hotkey, key: KeySpec, modifier: Modifier) -> bool {
    let key_ok = match (binding.key, key) {
        (KeySpec::Char(a), KeySpec::Char(b)) => a.eq_ignore_ascii_case(&b),
        (a, b) => a == b,
    };
    let mod_ok = binding.modifier == modifier
        || (matches!(key, KeySpec::Char(_))
            && modifier == Modifier::Shift
            && binding.modifier == Modifier::None);
    key_ok && mod_ok
}
