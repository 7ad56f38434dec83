//! The ruler session: one object owning all measurement and calibration
//! state, mutated only through a single dispatch entry point.
//!
//! Input adapters feed the session two kinds of events: click coordinates
//! (already in frame pixel space) via [`RulerSession::handle_click`], and
//! named [`RulerAction`]s via [`RulerSession::apply`]. Each event mutates
//! exactly one component; rendering queries the session separately and never
//! mutates it.

use crate::calibration::{Calibration, REFERENCE_STEP};
use crate::measure::{MeasurementStore, PendingPoints};
use crate::units::DisplayMode;
use crate::Point;

// ─────────────────────────────────────────────────────────────────────────────
// Actions
// ─────────────────────────────────────────────────────────────────────────────

/// Named key actions consumed by the session, decoupled from whatever raw
/// key-code scheme the input library uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RulerAction {
    /// Drop the in-progress point buffer (stored measurements untouched).
    ClearPending,
    /// Drop the in-progress buffer and all stored measurements.
    ClearAll,
    /// Enter calibration mode; invalidates any prior calibration.
    EnterCalibration,
    /// Confirm the collected calibration pair (no-op without two points).
    ConfirmCalibration,
    /// Toggle between pixel and physical-unit display.
    ToggleUnits,
    /// Increase the calibration reference length by one step.
    IncreaseReference,
    /// Decrease the calibration reference length by one step (floored).
    DecreaseReference,
    /// End the session.
    Quit,
}

/// Outcome of dispatching an action: keep running or end the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

// ─────────────────────────────────────────────────────────────────────────────
// RulerSession
// ─────────────────────────────────────────────────────────────────────────────

/// Explicit session object owning the pending-point buffer, the measurement
/// store, the calibration controller, and the display mode. No ambient
/// globals; the control loop holds exactly one of these.
#[derive(Debug, Clone)]
pub struct RulerSession {
    pending: PendingPoints,
    store: MeasurementStore,
    calibration: Calibration,
    display: DisplayMode,
    unit_label: String,
}

impl RulerSession {
    /// New session with the given unit label (e.g. `"cm"`) and starting
    /// calibration reference length.
    pub fn new(unit_label: impl Into<String>, reference_length: f64) -> Self {
        Self {
            pending: PendingPoints::default(),
            store: MeasurementStore::default(),
            calibration: Calibration::new(reference_length),
            display: DisplayMode::default(),
            unit_label: unit_label.into(),
        }
    }

    /// Route a pointer-down event in frame coordinates.
    ///
    /// While calibration is active the click goes to the calibration
    /// controller; otherwise it goes to the point accumulator, and a pair
    /// closed by this click is appended to the store.
    pub fn handle_click(&mut self, p: Point) {
        if self.calibration.is_active() {
            self.calibration.add_point(p);
        } else if let Some(m) = self.pending.push(p) {
            self.store.append(m);
        }
    }

    /// Dispatch a named action. All transitions are total: actions whose
    /// preconditions do not hold are no-ops, never errors.
    #[must_use]
    pub fn apply(&mut self, action: RulerAction) -> Flow {
        match action {
            RulerAction::ClearPending => self.pending.clear(),
            RulerAction::ClearAll => {
                // Two independent clears bound to one user action.
                self.pending.clear();
                self.store.clear_all();
            }
            RulerAction::EnterCalibration => self.calibration.begin(),
            RulerAction::ConfirmCalibration => self.calibration.confirm(),
            RulerAction::ToggleUnits => self.display.toggle(),
            RulerAction::IncreaseReference => self.calibration.adjust_reference(REFERENCE_STEP),
            RulerAction::DecreaseReference => self.calibration.adjust_reference(-REFERENCE_STEP),
            RulerAction::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    /// Format a pixel distance per the current display mode and calibration
    /// state: `"12.3 cm"` when converting, `"123.4 px"` otherwise.
    pub fn format_distance(&self, pixel_distance: f64) -> String {
        if self.display == DisplayMode::PhysicalUnits && self.calibration.is_calibrated() {
            format!(
                "{:.1} {}",
                self.calibration.convert(pixel_distance),
                self.unit_label
            )
        } else {
            format!("{pixel_distance:.1} px")
        }
    }

    pub fn pending(&self) -> &PendingPoints {
        &self.pending
    }

    pub fn store(&self) -> &MeasurementStore {
        &self.store
    }

    pub fn calibration(&self) -> &Calibration {
        &self.calibration
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.display
    }

    pub fn unit_label(&self) -> &str {
        &self.unit_label
    }
}

impl Default for RulerSession {
    fn default() -> Self {
        Self::new("cm", 10.0)
    }
}
