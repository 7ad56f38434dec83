//! Declarative overlay primitives and the per-frame render query.
//!
//! Each frame the render adapter asks the session for the current overlay:
//! a flat list of lines, markers, and labels in frame pixel coordinates.
//! Building the list is a pure function of session state — no side effects,
//! idempotent, safe to call every frame. The adapter decides how to rasterize
//! the primitives; the core never touches a drawing backend.

use crate::calibration::CalibrationPhase;
use crate::color_scheme::OverlayColors;
use crate::geometry::{midpoint, Point};
use crate::session::RulerSession;
use crate::units::DisplayMode;

// ─────────────────────────────────────────────────────────────────────────────
// Primitives
// ─────────────────────────────────────────────────────────────────────────────

/// An RGB color triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A single overlay primitive in frame pixel coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum Drawable {
    Line {
        from: Point,
        to: Point,
        color: Rgb,
        width: f32,
    },
    /// A filled circle marking a selected point.
    Marker {
        at: Point,
        radius: f32,
        color: Rgb,
    },
    /// Text anchored at `at` (bottom-left).
    Label {
        at: Point,
        text: String,
        color: Rgb,
        size: f32,
    },
}

// Layout constants for the overlay.
const LINE_WIDTH: f32 = 2.0;
const MARKER_RADIUS: f32 = 5.0;
const CALIBRATION_MARKER_RADIUS: f32 = 6.0;
const LABEL_RAISE: i32 = 10;
const STORED_LABEL_SIZE: f32 = 14.0;
const PENDING_LABEL_SIZE: f32 = 18.0;
const STATUS_SIZE: f32 = 13.0;
const PROMPT_SIZE: f32 = 15.0;
const STATUS_X: i32 = 10;
const STATUS_TOP: i32 = 30;
const STATUS_LINE_STEP: i32 = 25;
const PROMPT_BOTTOM_MARGIN: i32 = 20;

// ─────────────────────────────────────────────────────────────────────────────
// Frame render query
// ─────────────────────────────────────────────────────────────────────────────

/// Build the complete overlay for one frame: stored measurements, the
/// in-progress pair, calibration markers and prompts, and the status panel.
pub fn overlay(
    session: &RulerSession,
    frame_size: [u32; 2],
    colors: &OverlayColors,
) -> Vec<Drawable> {
    let mut out = Vec::new();
    push_stored(session, colors, &mut out);
    push_pending(session, colors, &mut out);
    push_calibration(session, frame_size, colors, &mut out);
    push_status(session, colors, &mut out);
    out
}

fn push_pair(
    out: &mut Vec<Drawable>,
    a: Point,
    b: Point,
    text: String,
    line_color: Rgb,
    label_color: Rgb,
    label_size: f32,
) {
    out.push(Drawable::Line {
        from: a,
        to: b,
        color: line_color,
        width: LINE_WIDTH,
    });
    out.push(Drawable::Marker {
        at: a,
        radius: MARKER_RADIUS,
        color: line_color,
    });
    out.push(Drawable::Marker {
        at: b,
        radius: MARKER_RADIUS,
        color: line_color,
    });
    let mid = midpoint(a, b);
    out.push(Drawable::Label {
        at: Point::new(mid.x, mid.y - LABEL_RAISE),
        text,
        color: label_color,
        size: label_size,
    });
}

fn push_stored(session: &RulerSession, colors: &OverlayColors, out: &mut Vec<Drawable>) {
    for m in session.store().all() {
        let (a, b) = m.endpoints();
        push_pair(
            out,
            a,
            b,
            session.format_distance(m.pixel_distance()),
            colors.stored,
            colors.stored_label,
            STORED_LABEL_SIZE,
        );
    }
}

fn push_pending(session: &RulerSession, colors: &OverlayColors, out: &mut Vec<Drawable>) {
    match session.pending().points() {
        &[p] => out.push(Drawable::Marker {
            at: p,
            radius: MARKER_RADIUS,
            color: colors.pending,
        }),
        &[a, b] => {
            let d = a.distance_to(b);
            push_pair(
                out,
                a,
                b,
                session.format_distance(d),
                colors.pending,
                colors.pending,
                PENDING_LABEL_SIZE,
            );
        }
        _ => {}
    }
}

fn push_calibration(
    session: &RulerSession,
    frame_size: [u32; 2],
    colors: &OverlayColors,
    out: &mut Vec<Drawable>,
) {
    let cal = session.calibration();
    for &p in cal.points() {
        out.push(Drawable::Marker {
            at: p,
            radius: CALIBRATION_MARKER_RADIUS,
            color: colors.calibration,
        });
    }
    if let &[a, b] = cal.points() {
        out.push(Drawable::Line {
            from: a,
            to: b,
            color: colors.calibration,
            width: LINE_WIDTH,
        });
    }

    let prompt = match cal.phase() {
        CalibrationPhase::Collecting if cal.points().is_empty() => {
            "Calibration: click first point".to_string()
        }
        CalibrationPhase::Collecting => "Calibration: click second point".to_string(),
        CalibrationPhase::ReadyToConfirm => {
            // pending_distance is always present with two points collected
            let d = cal.pending_distance().unwrap_or(0.0);
            format!(
                "Press Enter to confirm: {:.1} px = {:.1} {}",
                d,
                cal.reference_length(),
                session.unit_label()
            )
        }
        CalibrationPhase::Idle => return,
    };
    out.push(Drawable::Label {
        at: Point::new(STATUS_X, frame_size[1] as i32 - PROMPT_BOTTOM_MARGIN),
        text: prompt,
        color: colors.calibration,
        size: PROMPT_SIZE,
    });
}

fn push_status(session: &RulerSession, colors: &OverlayColors, out: &mut Vec<Drawable>) {
    out.push(Drawable::Label {
        at: Point::new(STATUS_X, STATUS_TOP),
        text: format!("Measurements: {}", session.store().count()),
        color: colors.status,
        size: STATUS_SIZE,
    });

    let cal = session.calibration();
    let unit = session.unit_label();
    let (text, color) = match session.display_mode() {
        DisplayMode::PhysicalUnits if cal.is_calibrated() => (
            format!("Display: {unit} (1 px = {:.3} {unit})", cal.convert(1.0)),
            colors.stored_label,
        ),
        DisplayMode::PhysicalUnits => (
            format!("Display: {unit} (Not calibrated!)"),
            colors.warning,
        ),
        DisplayMode::Pixels => ("Display: Pixels".to_string(), colors.status),
    };
    out.push(Drawable::Label {
        at: Point::new(STATUS_X, STATUS_TOP + STATUS_LINE_STEP),
        text,
        color,
        size: STATUS_SIZE,
    });
}
