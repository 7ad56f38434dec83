//! Integer pixel-space geometry shared by the measurement and calibration
//! state machines.
//!
//! All coordinates are in frame pixel space; distances are computed in `f64`
//! once and never recomputed.

/// A point in frame pixel space. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`, in pixels.
    pub fn distance_to(&self, other: Point) -> f64 {
        euclidean(*self, other)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Euclidean distance between two points, in pixels.
pub fn euclidean(a: Point, b: Point) -> f64 {
    let dx = (a.x - b.x) as f64;
    let dy = (a.y - b.y) as f64;
    dx.hypot(dy)
}

/// Midpoint of the segment `a`-`b`, rounded down to integer pixels.
/// Used for label placement.
pub fn midpoint(a: Point, b: Point) -> Point {
    Point::new((a.x + b.x) / 2, (a.y + b.y) / 2)
}
