//! Unit display mode: raw pixels or calibrated physical units.

/// How distances are formatted for rendering. Never affects stored data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Native pixel distances.
    Pixels,
    /// Distances converted through the calibration ratio. Rendering falls
    /// back to a "not calibrated" warning while no ratio is established.
    PhysicalUnits,
}

impl DisplayMode {
    /// Flip between the two modes.
    pub fn toggle(&mut self) {
        *self = match self {
            DisplayMode::Pixels => DisplayMode::PhysicalUnits,
            DisplayMode::PhysicalUnits => DisplayMode::Pixels,
        };
    }
}

impl Default for DisplayMode {
    fn default() -> Self {
        // The original tool starts in unit display and warns until calibrated.
        DisplayMode::PhysicalUnits
    }
}
