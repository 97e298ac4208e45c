//! TrackRows - Live Recording Statistics Rows
//!
//! Formats the statistics of a running activity recording (distance,
//! times, speed and pace, altitude, coordinates, heart rate, cadence,
//! power) into localized display rows and draws them with egui.

pub mod format;
pub mod i18n;
pub mod metrics;
pub mod recording;
pub mod stats;
pub mod storage;
pub mod ui;

// Re-export commonly used types
pub use i18n::{Language, Localizer};
pub use metrics::zones::HeartRateZones;
pub use recording::RecordingData;
pub use stats::{RecordingDataObserver, RenderContext, RenderedRow, StatKind, StatsList};
pub use storage::config::{AppConfig, UnitSystem};
