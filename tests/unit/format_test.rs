//! Unit tests for value formatters.

use std::time::Duration;
use trackrows::format::{
    self, format_decimal, format_elapsed_time, DistanceFormatter, SpeedFormatter, ValueAndUnit,
    PLACEHOLDER,
};
use trackrows::i18n::Localizer;
use trackrows::recording::Speed;
use trackrows::storage::config::UnitSystem;

#[test]
fn test_distance_switches_to_large_unit() {
    let l = Localizer::english().unwrap();
    let formatter = DistanceFormatter::new(UnitSystem::Metric);

    assert_eq!(formatter.distance_parts(499.0, &l), ValueAndUnit::new("499", "m"));
    assert_eq!(formatter.distance_parts(500.0, &l), ValueAndUnit::new("500", "m"));
    assert_eq!(formatter.distance_parts(501.0, &l), ValueAndUnit::new("0.5", "km"));
    assert_eq!(formatter.distance_parts(5000.0, &l), ValueAndUnit::new("5.0", "km"));
}

#[test]
fn test_distance_custom_threshold() {
    let l = Localizer::english().unwrap();
    let formatter = DistanceFormatter::new(UnitSystem::Metric).with_threshold(2.0);

    assert_eq!(formatter.distance_parts(1500.0, &l), ValueAndUnit::new("1500", "m"));
    assert_eq!(formatter.distance_parts(2000.0, &l), ValueAndUnit::new("2000", "m"));
    assert_eq!(formatter.distance_parts(2500.0, &l), ValueAndUnit::new("2.5", "km"));
}

#[test]
fn test_nautical_small_distance_in_feet() {
    let l = Localizer::english().unwrap();
    let parts = DistanceFormatter::new(UnitSystem::NauticalImperial).distance_parts(30.48, &l);

    assert_eq!(parts, ValueAndUnit::new("100", "ft"));
}

#[test]
fn test_pace_units() {
    let l = Localizer::english().unwrap();
    let speed = Some(Speed::from_mps(4.4704));

    let imperial = SpeedFormatter::new(UnitSystem::ImperialMeter)
        .with_report_speed(false)
        .speed_parts(speed, &l);
    // 10 mph is 6:00 min/mi
    assert_eq!(imperial, ValueAndUnit::new("6:00", "min/mi"));
}

#[test]
fn test_pace_of_stationary_rider() {
    let l = Localizer::english().unwrap();
    let formatter = SpeedFormatter::new(UnitSystem::Metric).with_report_speed(false);

    assert!(!formatter.reports_speed());
    for speed in [Speed::from_mps(0.0), Speed::from_mps(f64::INFINITY)] {
        let parts = formatter.speed_parts(Some(speed), &l);
        assert_eq!(parts.value, PLACEHOLDER);
        assert_eq!(parts.unit, "min/km");
    }
}

#[test]
fn test_whole_number_readings() {
    let l = Localizer::english().unwrap();

    assert_eq!(
        format::heart_rate_parts(Some(142.6), &l),
        ValueAndUnit::new("143", "bpm")
    );
    assert_eq!(
        format::cadence_parts(Some(88.2), &l),
        ValueAndUnit::new("88", "rpm")
    );
    assert_eq!(
        format::power_parts(Some(f32::NAN), &l),
        ValueAndUnit::new("--", "W")
    );
}

#[test]
fn test_altitude_units() {
    let l = Localizer::english().unwrap();

    assert_eq!(
        format::altitude_parts(Some(-12.6), UnitSystem::Metric, &l),
        ValueAndUnit::new("-13", "m")
    );
    assert_eq!(
        format::altitude_parts(None, UnitSystem::NauticalImperial, &l),
        ValueAndUnit::new("--", "ft")
    );
}

#[test]
fn test_elapsed_time_boundaries() {
    assert_eq!(format_elapsed_time(Duration::from_millis(59_999)), "00:59");
    assert_eq!(format_elapsed_time(Duration::from_secs(3600)), "1:00:00");
    assert_eq!(format_elapsed_time(Duration::from_secs(36_000)), "10:00:00");
}

#[test]
fn test_format_decimal_rounding() {
    assert_eq!(format_decimal(12.5, 2), "12.5");
    assert_eq!(format_decimal(0.999, 2), "1.0");
    assert_eq!(format_decimal(3.0, 1), "3.0");
}

#[test]
fn test_coordinates_use_six_places() {
    let l = Localizer::english().unwrap();

    assert_eq!(
        format::format_coordinate(-33.8688, 151.2093, &l),
        "-33.868800, 151.209300"
    );
}
