//! Heart rate zone classification and zone colors.
//!
//! Zones are derived from user preferences and handed to the renderer on
//! every pass, so a preference change shows up on the next render.

use serde::{Deserialize, Serialize};

/// RGB color representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to egui color format.
    pub fn to_egui(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// A heart rate zone range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HRZoneRange {
    /// Zone number (1-5)
    pub zone: u8,
    /// Minimum BPM
    pub min_bpm: u8,
    /// Maximum BPM
    pub max_bpm: u8,
    /// Display color
    pub color: Color,
}

/// Five-zone heart rate model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeartRateZones {
    /// Zone 1: Recovery
    pub z1_recovery: HRZoneRange,
    /// Zone 2: Aerobic
    pub z2_aerobic: HRZoneRange,
    /// Zone 3: Tempo
    pub z3_tempo: HRZoneRange,
    /// Zone 4: Threshold
    pub z4_threshold: HRZoneRange,
    /// Zone 5: Maximum
    pub z5_maximum: HRZoneRange,
    /// Whether zones are user-customized
    pub custom: bool,
}

impl HeartRateZones {
    /// Calculate heart rate zones using Karvonen formula.
    ///
    /// Karvonen formula: Target HR = ((max_hr - resting_hr) × %intensity) + resting_hr
    /// This uses Heart Rate Reserve (HRR) = max_hr - resting_hr
    pub fn from_hr(max_hr: u8, resting_hr: u8) -> Self {
        let hrr = max_hr.saturating_sub(resting_hr) as f32;

        let calc_hr = |percent: f32| -> u8 {
            let hr = (hrr * percent) + resting_hr as f32;
            hr.round().clamp(0.0, 255.0) as u8
        };

        let mut zones = Self::from_bounds(
            calc_hr(0.50),
            [
                calc_hr(0.60),
                calc_hr(0.70),
                calc_hr(0.80),
                calc_hr(0.90),
                max_hr,
            ],
        );
        zones.custom = false;
        zones
    }

    /// Build zones from a zone 1 floor and the upper bound of each zone.
    ///
    /// Bounds are sorted so a misordered preference still classifies
    /// monotonically.
    pub fn from_bounds(z1_min: u8, mut upper: [u8; 5]) -> Self {
        upper.sort_unstable();

        let range = |idx: usize| HRZoneRange {
            zone: idx as u8 + 1,
            min_bpm: if idx == 0 { z1_min } else { upper[idx - 1] },
            max_bpm: upper[idx],
            color: HR_ZONE_COLORS[idx],
        };

        Self {
            z1_recovery: range(0),
            z2_aerobic: range(1),
            z3_tempo: range(2),
            z4_threshold: range(3),
            z5_maximum: range(4),
            custom: true,
        }
    }

    /// Get the zone for a given heart rate value.
    pub fn get_zone(&self, hr: u8) -> u8 {
        if hr < self.z1_recovery.min_bpm {
            0 // Below zone 1
        } else if hr <= self.z1_recovery.max_bpm {
            1
        } else if hr <= self.z2_aerobic.max_bpm {
            2
        } else if hr <= self.z3_tempo.max_bpm {
            3
        } else if hr <= self.z4_threshold.max_bpm {
            4
        } else {
            5
        }
    }

    /// Zone for an optional, fractional sensor reading. Absent and
    /// non-finite readings map to zone 0.
    pub fn zone_for(&self, hr: Option<f32>) -> u8 {
        match hr {
            Some(bpm) if bpm.is_finite() => self.get_zone(bpm.round().clamp(0.0, 255.0) as u8),
            _ => 0,
        }
    }

    /// Text color for a heart rate value; neutral outside the zones.
    pub fn text_color_for(&self, hr: Option<f32>) -> Color {
        self.get_zone_range(self.zone_for(hr))
            .map(|range| range.color)
            .unwrap_or(HR_NEUTRAL_COLOR)
    }

    /// Get the zone range for a given zone number (1-5).
    pub fn get_zone_range(&self, zone: u8) -> Option<&HRZoneRange> {
        match zone {
            1 => Some(&self.z1_recovery),
            2 => Some(&self.z2_aerobic),
            3 => Some(&self.z3_tempo),
            4 => Some(&self.z4_threshold),
            5 => Some(&self.z5_maximum),
            _ => None,
        }
    }

    /// Get all zones as a vector.
    pub fn all_zones(&self) -> Vec<&HRZoneRange> {
        vec![
            &self.z1_recovery,
            &self.z2_aerobic,
            &self.z3_tempo,
            &self.z4_threshold,
            &self.z5_maximum,
        ]
    }
}

impl Default for HeartRateZones {
    fn default() -> Self {
        Self::from_hr(DEFAULT_MAX_HR, DEFAULT_RESTING_HR)
    }
}

/// Max heart rate used when the user has not set one.
pub const DEFAULT_MAX_HR: u8 = 190;

/// Resting heart rate used when the user has not set one.
pub const DEFAULT_RESTING_HR: u8 = 60;

/// Text color used when a heart rate falls into no zone.
pub const HR_NEUTRAL_COLOR: Color = Color::new(160, 160, 170);

/// Default heart rate zone colors
pub const HR_ZONE_COLORS: [Color; 5] = [
    Color::new(128, 128, 128), // Z1: Gray (Recovery)
    Color::new(0, 128, 255),   // Z2: Blue (Aerobic)
    Color::new(0, 200, 100),   // Z3: Green (Tempo)
    Color::new(255, 200, 0),   // Z4: Yellow (Threshold)
    Color::new(255, 50, 50),   // Z5: Red (Maximum)
];
