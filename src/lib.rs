//! frameruler crate root: re-exports and module wiring.
//!
//! An interactive on-screen ruler for live video streams: click two points to
//! measure their pixel distance, calibrate once against an object of known
//! length, and every distance is shown in real-world units.
//!
//! The crate splits into a pure core and a thin adapter:
//! - `geometry`, `measure`, `calibration`, `units`, `session`: the
//!   measurement/calibration state machine (no UI types)
//! - `draw`, `color_scheme`: the declarative per-frame overlay
//! - `source`: frame-producing collaborators and channels
//! - `hotkeys`, `config`: key bindings and launch configuration
//! - `app`, `run`: the egui/eframe render and input adapter

pub mod app;
pub mod calibration;
pub mod color_scheme;
pub mod config;
pub mod draw;
pub mod geometry;
pub mod hotkeys;
pub mod measure;
pub mod run;
pub mod session;
pub mod source;
pub mod units;

// Public re-exports for a compact external API
pub use calibration::{Calibration, CalibrationPhase, MIN_REFERENCE_LENGTH, REFERENCE_STEP};
pub use color_scheme::{OverlayColors, OverlayTheme};
pub use config::RulerConfig;
pub use draw::{overlay, Drawable, Rgb};
pub use geometry::{euclidean, midpoint, Point};
pub use hotkeys::{Hotkey, Hotkeys, KeySpec, Modifier};
pub use measure::{Measurement, MeasurementStore, PendingPoints};
pub use run::run_ruler;
pub use session::{Flow, RulerAction, RulerSession};
pub use source::{channel, ChannelSource, FramePoll, FrameSink, FrameSource, VideoFrame};
pub use units::DisplayMode;
