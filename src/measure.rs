//! Measurement accumulation and storage.
//!
//! Clicks accumulate into a [`PendingPoints`] buffer holding at most two
//! points. The click after a completed pair closes that pair into an
//! immutable [`Measurement`] and starts a fresh buffer containing only the
//! new point. Completed measurements live in an insertion-ordered
//! [`MeasurementStore`] until the user clears everything.

use crate::geometry::{euclidean, Point};

// ─────────────────────────────────────────────────────────────────────────────
// Measurement
// ─────────────────────────────────────────────────────────────────────────────

/// A finalized point pair plus its pixel distance.
///
/// The distance is computed exactly once at creation; the value is immutable
/// afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    endpoints: (Point, Point),
    pixel_distance: f64,
}

impl Measurement {
    pub fn new(a: Point, b: Point) -> Self {
        Self {
            endpoints: (a, b),
            pixel_distance: euclidean(a, b),
        }
    }

    pub fn endpoints(&self) -> (Point, Point) {
        self.endpoints
    }

    pub fn pixel_distance(&self) -> f64 {
        self.pixel_distance
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// PendingPoints – the in-progress pair
// ─────────────────────────────────────────────────────────────────────────────

/// Accumulator for the measurement currently being built (0–2 points).
#[derive(Debug, Clone, Default)]
pub struct PendingPoints {
    points: Vec<Point>,
}

impl PendingPoints {
    /// Add a click point.
    ///
    /// If two points are already buffered, the buffered pair is finalized
    /// into a [`Measurement`] (returned to the caller for storage) and the
    /// buffer restarts containing only `p`. The third click is never
    /// discarded and never joins the closed pair.
    pub fn push(&mut self, p: Point) -> Option<Measurement> {
        let closed = if self.points.len() == 2 {
            let m = Measurement::new(self.points[0], self.points[1]);
            self.points.clear();
            Some(m)
        } else {
            None
        };
        self.points.push(p);
        closed
    }

    /// Drop all buffered points without creating a measurement.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// The buffered points, oldest first (length 0, 1, or 2).
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Both points of a complete in-progress pair, if present.
    pub fn pair(&self) -> Option<(Point, Point)> {
        match self.points.as_slice() {
            [a, b] => Some((*a, *b)),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// MeasurementStore
// ─────────────────────────────────────────────────────────────────────────────

/// Insertion-ordered storage of completed measurements.
///
/// Purely append/clear semantics: no deduplication, no reordering. Clearing
/// the store does not touch any pending point buffer.
#[derive(Debug, Clone, Default)]
pub struct MeasurementStore {
    items: Vec<Measurement>,
}

impl MeasurementStore {
    pub fn append(&mut self, m: Measurement) {
        self.items.push(m);
    }

    pub fn clear_all(&mut self) {
        self.items.clear();
    }

    /// All measurements in insertion order (stable for rendering).
    pub fn all(&self) -> &[Measurement] {
        &self.items
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
