//! Configuration for the ruler application.

use crate::color_scheme::OverlayTheme;
use crate::hotkeys::Hotkeys;

/// Top-level configuration for the ruler window and session.
///
/// | Field              | Purpose |
/// |--------------------|---------|
/// | `title`            | Native window title |
/// | `unit_label`       | Physical unit shown after converted distances |
/// | `reference_length` | Starting calibration reference length, in units |
/// | `theme`            | Overlay color scheme |
/// | `hotkeys`          | Key bindings (`None` = defaults, then `~/.frameruler/hotkeys.yaml` if present) |
/// | `native_options`   | Optional eframe native-window options |
pub struct RulerConfig {
    /// Native window title.
    pub title: String,
    /// Unit label for converted distances (e.g. `"cm"`, `"mm"`, `"in"`).
    pub unit_label: String,
    /// Starting reference length for calibration, in physical units.
    pub reference_length: f64,
    /// Overlay color scheme.
    pub theme: OverlayTheme,
    /// Key bindings. `None` loads the saved bindings when available and
    /// falls back to the defaults.
    pub hotkeys: Option<Hotkeys>,
    /// Optional eframe native-window options.
    pub native_options: Option<eframe::NativeOptions>,
}

impl Default for RulerConfig {
    fn default() -> Self {
        Self {
            title: "Frame Ruler".to_string(),
            unit_label: "cm".to_string(),
            reference_length: 10.0,
            theme: OverlayTheme::default(),
            hotkeys: None,
            native_options: None,
        }
    }
}

impl RulerConfig {
    /// Resolve the effective hotkeys: explicit config wins, then the saved
    /// YAML file, then the defaults.
    pub fn effective_hotkeys(&self) -> Hotkeys {
        if let Some(hk) = &self.hotkeys {
            return hk.clone();
        }
        Hotkeys::load_from_default_path().unwrap_or_default()
    }
}
