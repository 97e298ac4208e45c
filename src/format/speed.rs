//! Speed and pace formatting.

use super::{format_decimal, ValueAndUnit};
use crate::i18n::Localizer;
use crate::recording::Speed;
use crate::storage::config::UnitSystem;

const MPS_TO_KMH: f64 = 3.6;
const MPS_TO_MPH: f64 = 2.236_936_292;
const MPS_TO_KNOTS: f64 = 1.943_844_492;

/// Slowest pace still shown, in seconds per large distance unit.
const MAX_PACE_SECS: f64 = 100.0 * 60.0;

/// Formats a speed either as speed or as pace (time per distance unit).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeedFormatter {
    units: UnitSystem,
    report_speed: bool,
}

impl SpeedFormatter {
    pub fn new(units: UnitSystem) -> Self {
        Self {
            units,
            report_speed: true,
        }
    }

    /// Report speed when `true`, pace when `false`.
    pub fn with_report_speed(mut self, report_speed: bool) -> Self {
        self.report_speed = report_speed;
        self
    }

    pub fn reports_speed(&self) -> bool {
        self.report_speed
    }

    /// Split a speed into value and unit. Unknown speeds, and paces of a
    /// stationary rider, render the placeholder.
    pub fn speed_parts(&self, speed: Option<Speed>, localizer: &Localizer) -> ValueAndUnit {
        if self.report_speed {
            let (factor, unit_key) = match self.units {
                UnitSystem::Metric => (MPS_TO_KMH, "unit-kilometer-per-hour"),
                UnitSystem::ImperialFeet | UnitSystem::ImperialMeter => {
                    (MPS_TO_MPH, "unit-mile-per-hour")
                }
                UnitSystem::NauticalImperial => (MPS_TO_KNOTS, "unit-knot"),
            };
            let unit = localizer.text(unit_key);
            return match speed.map(Speed::to_mps) {
                Some(mps) if mps.is_finite() => {
                    let value = format_decimal(mps * factor, 1);
                    ValueAndUnit::new(localizer.decimal(&value), unit)
                }
                _ => ValueAndUnit::placeholder(unit),
            };
        }

        let (factor, unit_key) = match self.units {
            UnitSystem::Metric => (MPS_TO_KMH, "unit-minute-per-kilometer"),
            UnitSystem::ImperialFeet | UnitSystem::ImperialMeter => {
                (MPS_TO_MPH, "unit-minute-per-mile")
            }
            UnitSystem::NauticalImperial => (MPS_TO_KNOTS, "unit-minute-per-nautical-mile"),
        };
        let unit = localizer.text(unit_key);
        match speed {
            Some(speed) if speed.is_moving() => {
                // Seconds per large distance unit.
                let pace_secs = 3600.0 / (speed.to_mps() * factor);
                if pace_secs.is_finite() && pace_secs < MAX_PACE_SECS {
                    ValueAndUnit::new(format_pace(pace_secs), unit)
                } else {
                    ValueAndUnit::placeholder(unit)
                }
            }
            _ => ValueAndUnit::placeholder(unit),
        }
    }
}

/// Pace in seconds as `M:SS`.
fn format_pace(pace_secs: f64) -> String {
    let total = pace_secs.round() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}
