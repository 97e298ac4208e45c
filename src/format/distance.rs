//! Distance formatting with automatic small/large unit selection.

use super::{format_decimal, ValueAndUnit, M_TO_FT};
use crate::i18n::Localizer;
use crate::storage::config::UnitSystem;

const M_PER_KM: f64 = 1000.0;
const M_PER_MI: f64 = 1609.344;
const M_PER_NM: f64 = 1852.0;

/// Formats distances, switching to the large unit above a threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceFormatter {
    units: UnitSystem,
    decimal_count: usize,
    /// Threshold in large units (km, mi, NM)
    threshold: f64,
}

impl Default for DistanceFormatter {
    fn default() -> Self {
        Self {
            units: UnitSystem::Metric,
            decimal_count: 2,
            threshold: 0.5,
        }
    }
}

impl DistanceFormatter {
    pub fn new(units: UnitSystem) -> Self {
        Self {
            units,
            ..Default::default()
        }
    }

    pub fn with_decimal_count(mut self, decimal_count: usize) -> Self {
        self.decimal_count = decimal_count;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Split a distance in meters into value and unit.
    pub fn distance_parts(&self, meters: f64, localizer: &Localizer) -> ValueAndUnit {
        let (large_m, large_key) = match self.units {
            UnitSystem::Metric => (M_PER_KM, "unit-kilometer"),
            UnitSystem::ImperialFeet | UnitSystem::ImperialMeter => (M_PER_MI, "unit-mile"),
            UnitSystem::NauticalImperial => (M_PER_NM, "unit-nautical-mile"),
        };

        if !meters.is_finite() {
            return ValueAndUnit::placeholder(localizer.text(large_key));
        }

        let large = meters / large_m;
        if large > self.threshold {
            return ValueAndUnit::new(
                localizer.decimal(&format_decimal(large, self.decimal_count)),
                localizer.text(large_key),
            );
        }

        match self.units {
            UnitSystem::Metric | UnitSystem::ImperialMeter => {
                ValueAndUnit::new(format_decimal(meters, 0), localizer.text("unit-meter"))
            }
            UnitSystem::ImperialFeet | UnitSystem::NauticalImperial => ValueAndUnit::new(
                format_decimal(meters * M_TO_FT, 0),
                localizer.text("unit-foot"),
            ),
        }
    }
}
