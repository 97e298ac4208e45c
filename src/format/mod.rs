//! Value formatters turning raw recording values into display strings.
//!
//! Every formatter is a pure function of its input, the unit system and
//! the localizer. Absent or non-finite input produces [`PLACEHOLDER`] with
//! the unit the value would have had.

pub mod distance;
pub mod speed;

pub use distance::DistanceFormatter;
pub use speed::SpeedFormatter;

use crate::i18n::Localizer;
use crate::storage::config::UnitSystem;
use fluent::FluentArgs;
use std::time::Duration;

/// Value shown when a number is unknown.
pub const PLACEHOLDER: &str = "--";

pub(crate) const M_TO_FT: f64 = 3.280_839_895;

/// A formatted number and its unit abbreviation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueAndUnit {
    pub value: String,
    pub unit: String,
}

impl ValueAndUnit {
    pub fn new(value: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            unit: unit.into(),
        }
    }

    /// Placeholder value with the given unit.
    pub fn placeholder(unit: impl Into<String>) -> Self {
        Self::new(PLACEHOLDER, unit)
    }

    pub fn is_placeholder(&self) -> bool {
        self.value == PLACEHOLDER
    }
}

/// Format with `places` decimals, trimming trailing zeros but keeping at
/// least one decimal (`5.00` becomes `5.0`). Values that round to zero
/// never carry a minus sign.
pub fn format_decimal(value: f64, places: usize) -> String {
    let half_step = 0.5 * 10f64.powi(-(places as i32));
    let value = if value.abs() <= half_step { 0.0 } else { value };
    let mut text = format!("{:.*}", places, value);
    if places > 1 {
        let min_len = text.len() - (places - 1);
        while text.len() > min_len && text.ends_with('0') {
            text.pop();
        }
    }
    text
}

/// Format a whole-number reading, or the placeholder.
fn whole_number_parts(value: Option<f64>, unit: String) -> ValueAndUnit {
    match value {
        Some(v) if v.is_finite() => ValueAndUnit::new(format_decimal(v, 0), unit),
        _ => ValueAndUnit::placeholder(unit),
    }
}

/// Altitude in meters or feet depending on the unit system.
pub fn altitude_parts(
    altitude_m: Option<f64>,
    units: UnitSystem,
    localizer: &Localizer,
) -> ValueAndUnit {
    match units {
        UnitSystem::Metric | UnitSystem::ImperialMeter => {
            whole_number_parts(altitude_m, localizer.text("unit-meter"))
        }
        UnitSystem::ImperialFeet | UnitSystem::NauticalImperial => {
            whole_number_parts(altitude_m.map(|m| m * M_TO_FT), localizer.text("unit-foot"))
        }
    }
}

/// Heart rate in beats per minute.
pub fn heart_rate_parts(bpm: Option<f32>, localizer: &Localizer) -> ValueAndUnit {
    whole_number_parts(bpm.map(f64::from), localizer.text("unit-bpm"))
}

/// Cadence in revolutions per minute.
pub fn cadence_parts(rpm: Option<f32>, localizer: &Localizer) -> ValueAndUnit {
    whole_number_parts(rpm.map(f64::from), localizer.text("unit-rpm"))
}

/// Power in watts.
pub fn power_parts(watts: Option<f32>, localizer: &Localizer) -> ValueAndUnit {
    whole_number_parts(watts.map(f64::from), localizer.text("unit-watt"))
}

/// Elapsed time as `MM:SS`, or `H:MM:SS` from one hour on.
pub fn format_elapsed_time(elapsed: Duration) -> String {
    let seconds = elapsed.as_secs();
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{:02}:{:02}", minutes, secs)
    }
}

/// Latitude and longitude in decimal degrees.
pub fn format_coordinate(latitude: f64, longitude: f64, localizer: &Localizer) -> String {
    let mut args = FluentArgs::new();
    args.set("latitude", format!("{:.6}", latitude));
    args.set("longitude", format!("{:.6}", longitude));
    localizer.text_args("value-coordinates", &args)
}
