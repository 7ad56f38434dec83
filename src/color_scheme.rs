//! Overlay color schemes.
//!
//! Colors are plain RGB triples so the core stays independent of the render
//! backend; the egui adapter converts them when painting.

use crate::draw::Rgb;

/// Resolved set of overlay colors used by the frame render query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayColors {
    /// Lines and endpoint markers of stored measurements.
    pub stored: Rgb,
    /// Distance labels of stored measurements.
    pub stored_label: Rgb,
    /// In-progress points, line, and label.
    pub pending: Rgb,
    /// Calibration markers, line, and prompts.
    pub calibration: Rgb,
    /// Status panel text.
    pub status: Rgb,
    /// Warning text (e.g. unit display while uncalibrated).
    pub warning: Rgb,
}

/// Visual theme for the ruler overlay, including user-defined schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayTheme {
    /// Green stored / red pending / magenta calibration, as in the classic
    /// OpenCV-style ruler overlays.
    Classic,
    /// Maximally-saturated colors on any background.
    HighContrast,
    /// User-defined palette.
    Custom(OverlayColors),
}

impl OverlayTheme {
    /// Human-readable label (for settings UIs).
    pub fn label(&self) -> &'static str {
        match self {
            OverlayTheme::Classic => "Classic",
            OverlayTheme::HighContrast => "High Contrast",
            OverlayTheme::Custom(_) => "Custom",
        }
    }

    /// Resolve the theme to concrete colors.
    pub fn colors(&self) -> OverlayColors {
        match self {
            OverlayTheme::Classic => OverlayColors {
                stored: Rgb::new(0, 255, 0),
                stored_label: Rgb::new(255, 255, 0),
                pending: Rgb::new(255, 0, 0),
                calibration: Rgb::new(255, 0, 255),
                status: Rgb::new(255, 255, 255),
                warning: Rgb::new(255, 64, 64),
            },
            OverlayTheme::HighContrast => OverlayColors {
                stored: Rgb::new(0, 255, 255),
                stored_label: Rgb::new(255, 255, 255),
                pending: Rgb::new(255, 128, 0),
                calibration: Rgb::new(255, 0, 128),
                status: Rgb::new(255, 255, 255),
                warning: Rgb::new(255, 0, 0),
            },
            OverlayTheme::Custom(colors) => *colors,
        }
    }
}

impl Default for OverlayTheme {
    fn default() -> Self {
        OverlayTheme::Classic
    }
}
