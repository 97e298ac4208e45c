//! Metrics module for heart rate zones and zone colors.

pub mod zones;

pub use zones::{Color, HeartRateZones, HR_NEUTRAL_COLOR, HR_ZONE_COLORS};
