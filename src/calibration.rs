//! Two-point calibration against an object of known length.
//!
//! The controller collects two clicks on an object of known physical length
//! and, on explicit confirmation, derives the pixel-per-unit ratio used to
//! convert all rendered distances. The calibrated flag is orthogonal to the
//! collection phase: a session can be calibrated while the controller sits
//! idle.

use crate::geometry::{euclidean, Point};

/// Smallest reference length the user can dial in, in physical units.
pub const MIN_REFERENCE_LENGTH: f64 = 0.5;

/// Step applied by the increase/decrease reference-length actions.
pub const REFERENCE_STEP: f64 = 0.5;

/// Collection phase of the calibration controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalibrationPhase {
    /// Not in calibration mode. The session may still be calibrated from an
    /// earlier confirm.
    Idle,
    /// Gathering calibration clicks (0 or 1 so far).
    Collecting,
    /// Two points gathered; awaiting the confirm action.
    ReadyToConfirm,
}

/// Calibration state machine: 0–2 reference points, a user-adjustable
/// reference length, and the derived pixels-per-unit ratio.
#[derive(Debug, Clone)]
pub struct Calibration {
    phase: CalibrationPhase,
    points: Vec<Point>,
    reference_length: f64,
    ratio: f64,
    calibrated: bool,
}

impl Calibration {
    /// New uncalibrated controller. The ratio starts at an inert `1.0`; it is
    /// meaningless until [`is_calibrated`](Self::is_calibrated) is true.
    pub fn new(reference_length: f64) -> Self {
        Self {
            phase: CalibrationPhase::Idle,
            points: Vec::new(),
            reference_length: reference_length.max(MIN_REFERENCE_LENGTH),
            ratio: 1.0,
            calibrated: false,
        }
    }

    /// Enter (or re-enter) calibration mode.
    ///
    /// Clears any collected points and unconditionally invalidates a prior
    /// calibration, even before a new pair is confirmed. The established
    /// ratio value itself is kept so a later degenerate confirm leaves it
    /// observable and unchanged.
    pub fn begin(&mut self) {
        self.points.clear();
        self.calibrated = false;
        self.phase = CalibrationPhase::Collecting;
    }

    /// Record a calibration click. Ignored unless collecting.
    pub fn add_point(&mut self, p: Point) {
        if self.phase != CalibrationPhase::Collecting {
            return;
        }
        self.points.push(p);
        if self.points.len() == 2 {
            self.phase = CalibrationPhase::ReadyToConfirm;
        }
    }

    /// Confirm the collected pair. Ignored unless two points are present.
    ///
    /// With a positive pixel distance `d` this sets
    /// `ratio = d / reference_length` and marks the session calibrated.
    /// A degenerate pair (`d == 0`) changes neither ratio nor flag. In both
    /// cases the points are cleared and the phase returns to idle.
    pub fn confirm(&mut self) {
        if self.phase != CalibrationPhase::ReadyToConfirm {
            return;
        }
        let d = euclidean(self.points[0], self.points[1]);
        if d > 0.0 {
            self.ratio = d / self.reference_length;
            self.calibrated = true;
        }
        self.points.clear();
        self.phase = CalibrationPhase::Idle;
    }

    /// Adjust the reference length by `delta` units, clamped to
    /// [`MIN_REFERENCE_LENGTH`]. Never touches an established ratio; the
    /// ratio is only recomputed by a future confirm.
    pub fn adjust_reference(&mut self, delta: f64) {
        self.reference_length = (self.reference_length + delta).max(MIN_REFERENCE_LENGTH);
    }

    /// Convert a pixel distance to physical units.
    ///
    /// The result is only meaningful while [`is_calibrated`](Self::is_calibrated)
    /// returns true; querying while uncalibrated is not an error, gating the
    /// display is the renderer's job.
    pub fn convert(&self, pixel_distance: f64) -> f64 {
        pixel_distance / self.ratio
    }

    /// Pixel distance between the two collected points, once both exist.
    pub fn pending_distance(&self) -> Option<f64> {
        match self.points.as_slice() {
            [a, b] => Some(euclidean(*a, *b)),
            _ => None,
        }
    }

    pub fn phase(&self) -> CalibrationPhase {
        self.phase
    }

    /// True while the controller consumes clicks (any phase but idle).
    pub fn is_active(&self) -> bool {
        self.phase != CalibrationPhase::Idle
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn is_calibrated(&self) -> bool {
        self.calibrated
    }

    /// Pixels per physical unit. Meaningful only while calibrated.
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    pub fn reference_length(&self) -> f64 {
        self.reference_length
    }
}

impl Default for Calibration {
    fn default() -> Self {
        Self::new(10.0)
    }
}
