//! Unit tests for statistics row rendering.

use chrono::{TimeZone, Utc};
use std::time::Duration;
use trackrows::i18n::{Language, Localizer};
use trackrows::metrics::zones::{HeartRateZones, HR_NEUTRAL_COLOR, HR_ZONE_COLORS};
use trackrows::recording::{
    Altitude, AltitudeReference, Position, RecordingData, SensorDataSet, SensorReading, Speed,
    TrackPoint, TrackStatistics,
};
use trackrows::stats::{
    DataField, RecordingDataObserver, RecordingLayout, RenderContext, RowStyle, StatKind,
    StatsList, StatsRowView, TextAppearance,
};
use trackrows::storage::config::UnitSystem;

fn track_point() -> TrackPoint {
    TrackPoint::new(Utc.with_ymd_and_hms(2026, 5, 1, 8, 30, 0).unwrap())
}

fn heart_rate(bpm: f32) -> RecordingData {
    RecordingData::default().with_sensor_data(SensorDataSet {
        heart_rate: Some(SensorReading::new(bpm, "Polar H10")),
        ..Default::default()
    })
}

// =============================================================================
// Absent data
// =============================================================================

#[test]
fn test_absent_sources_render_placeholders() {
    let localizer = Localizer::english().unwrap();
    let zones = HeartRateZones::default();
    let ctx = RenderContext::new(UnitSystem::Metric, &zones, &localizer);
    let data = RecordingData::default();

    let expected = [
        (StatKind::SpeedOrPace, "km/h"),
        (StatKind::Altitude, "m"),
        (StatKind::Gain, "m"),
        (StatKind::Loss, "m"),
        (StatKind::HeartRate, "bpm"),
        (StatKind::Cadence, "rpm"),
        (StatKind::Power, "rpm"),
    ];
    for (kind, unit) in expected {
        let row = kind.render(&ctx, &data);
        assert_eq!(row.value, "--", "{:?}", kind);
        assert_eq!(row.unit.as_deref(), Some(unit), "{:?}", kind);
    }
}

#[test]
fn test_absent_paces_render_placeholders() {
    let localizer = Localizer::english().unwrap();
    let zones = HeartRateZones::default();
    let ctx = RenderContext::new(UnitSystem::Metric, &zones, &localizer);
    let data = RecordingData::default();

    for kind in [
        StatKind::AverageMovingPace,
        StatKind::AveragePace,
        StatKind::FastestPace,
    ] {
        let row = kind.render(&ctx, &data);
        assert_eq!(row.value, "--");
        assert_eq!(row.unit.as_deref(), Some("min/km"));
    }
}

#[test]
fn test_coordinates_without_fix() {
    let localizer = Localizer::english().unwrap();
    let zones = HeartRateZones::default();
    let ctx = RenderContext::new(UnitSystem::Metric, &zones, &localizer);

    // A point without position still has no fix
    let data = RecordingData::default().with_track_point(track_point());
    let row = StatKind::Coordinates.render(&ctx, &data);

    assert_eq!(row.value, "unknown");
    assert_eq!(row.unit, None);
    assert_eq!(row.label, "Coordinates");
}

#[test]
fn test_sensor_rows_name_unknown_sensor() {
    let localizer = Localizer::english().unwrap();
    let zones = HeartRateZones::default();
    let ctx = RenderContext::new(UnitSystem::Metric, &zones, &localizer);
    let data = RecordingData::default().with_sensor_data(SensorDataSet::default());

    for kind in [StatKind::HeartRate, StatKind::Cadence, StatKind::Power] {
        let row = kind.render(&ctx, &data);
        assert_eq!(row.secondary.as_deref(), Some("unknown"), "{:?}", kind);
    }
    let hr = StatKind::HeartRate.render(&ctx, &data);
    assert_eq!(hr.value_color, Some(HR_NEUTRAL_COLOR));
}

// =============================================================================
// Distance, time, altitude
// =============================================================================

#[test]
fn test_distance_five_km() {
    let localizer = Localizer::english().unwrap();
    let zones = HeartRateZones::default();
    let ctx = RenderContext::new(UnitSystem::Metric, &zones, &localizer);
    let data = RecordingData::from_statistics(TrackStatistics {
        total_distance_m: 5000.0,
        ..Default::default()
    });

    let row = StatKind::Distance.render(&ctx, &data);
    assert_eq!(row.value, "5.0");
    assert_eq!(row.unit.as_deref(), Some("km"));
    assert_eq!(row.label, "Distance");
}

#[test]
fn test_total_time_over_an_hour() {
    let localizer = Localizer::english().unwrap();
    let zones = HeartRateZones::default();
    let ctx = RenderContext::new(UnitSystem::Metric, &zones, &localizer);
    let data = RecordingData::from_statistics(TrackStatistics {
        total_time: Duration::from_secs(3725),
        ..Default::default()
    });

    let row = StatKind::TotalTime.render(&ctx, &data);
    assert_eq!(row.value, "1:02:05");
    assert_eq!(row.unit, None);
    assert_eq!(row.label, "Total time");
}

#[test]
fn test_gain_rounds_to_whole_meters() {
    let localizer = Localizer::english().unwrap();
    let zones = HeartRateZones::default();
    let ctx = RenderContext::new(UnitSystem::Metric, &zones, &localizer);
    let data = RecordingData::from_statistics(TrackStatistics {
        total_altitude_gain_m: Some(123.4),
        ..Default::default()
    });

    let row = StatKind::Gain.render(&ctx, &data);
    assert_eq!(row.value, "123");
    assert_eq!(row.unit.as_deref(), Some("m"));
    assert_eq!(row.label, "Gain");
}

#[test]
fn test_altitude_in_feet_with_reference() {
    let localizer = Localizer::english().unwrap();
    let zones = HeartRateZones::default();
    let ctx = RenderContext::new(UnitSystem::ImperialFeet, &zones, &localizer);
    let mut point = track_point();
    point.altitude = Some(Altitude {
        meters: 100.0,
        reference: AltitudeReference::Egm2008,
    });
    let data = RecordingData::default().with_track_point(point);

    let row = StatKind::Altitude.render(&ctx, &data);
    assert_eq!(row.value, "328");
    assert_eq!(row.unit.as_deref(), Some("ft"));
    assert!(row.secondary.is_some());
}

#[test]
fn test_coordinates_with_fix() {
    let localizer = Localizer::english().unwrap();
    let zones = HeartRateZones::default();
    let ctx = RenderContext::new(UnitSystem::Metric, &zones, &localizer);
    let mut point = track_point();
    point.position = Some(Position {
        latitude: 52.520008,
        longitude: 13.404954,
    });
    let data = RecordingData::default().with_track_point(point);

    let row = StatKind::Coordinates.render(&ctx, &data);
    assert_eq!(row.value, "52.520008, 13.404954");
    assert_eq!(row.unit, None);
}

// =============================================================================
// Speed and pace
// =============================================================================

#[test]
fn test_sensor_speed_wins_over_gps() {
    let localizer = Localizer::english().unwrap();
    let zones = HeartRateZones::default();
    let ctx = RenderContext::new(UnitSystem::Metric, &zones, &localizer);
    let mut point = track_point();
    point.speed = Some(Speed::from_mps(5.0));
    let data = RecordingData::default()
        .with_track_point(point)
        .with_sensor_data(SensorDataSet {
            speed: Some(SensorReading::new(Speed::from_mps(10.0), "Wahoo Speed")),
            ..Default::default()
        });

    let row = StatKind::SpeedOrPace.render(&ctx, &data);
    assert_eq!(row.value, "36.0");
    assert_eq!(row.unit.as_deref(), Some("km/h"));
    assert_eq!(row.label, "Wahoo Speed");
}

#[test]
fn test_gps_speed_without_sensor() {
    let localizer = Localizer::english().unwrap();
    let zones = HeartRateZones::default();
    let ctx = RenderContext::new(UnitSystem::Metric, &zones, &localizer);
    let mut point = track_point();
    point.speed = Some(Speed::from_mps(5.0));
    let data = RecordingData::default().with_track_point(point);

    let row = StatKind::SpeedOrPace.render(&ctx, &data);
    assert_eq!(row.value, "18.0");
    assert_eq!(row.label, "GPS");
}

#[test]
fn test_sensors_without_speed_fall_back_to_gps() {
    let localizer = Localizer::english().unwrap();
    let zones = HeartRateZones::default();
    let ctx = RenderContext::new(UnitSystem::Metric, &zones, &localizer);
    let mut point = track_point();
    point.speed = Some(Speed::from_mps(5.0));
    let data = RecordingData::default()
        .with_track_point(point)
        .with_sensor_data(SensorDataSet {
            heart_rate: Some(SensorReading::new(120.0, "Polar H10")),
            cadence: Some(SensorReading::new(85.0, "Garmin Cadence")),
            ..Default::default()
        });

    let row = StatKind::SpeedOrPace.render(&ctx, &data);
    assert_eq!(row.value, "18.0");
    assert_eq!(row.unit.as_deref(), Some("km/h"));
    assert_eq!(row.label, "GPS");
}

#[test]
fn test_no_speed_source_is_labeled_gps() {
    let localizer = Localizer::english().unwrap();
    let zones = HeartRateZones::default();
    let ctx = RenderContext::new(UnitSystem::Metric, &zones, &localizer);

    let row = StatKind::SpeedOrPace.render(&ctx, &RecordingData::default());
    assert_eq!(row.value, "--");
    assert_eq!(row.label, "GPS");
}

#[test]
fn test_speed_or_pace_honors_preference() {
    let localizer = Localizer::english().unwrap();
    let zones = HeartRateZones::default();
    let ctx =
        RenderContext::new(UnitSystem::Metric, &zones, &localizer).with_report_speed(false);
    let mut point = track_point();
    point.speed = Some(Speed::from_kmh(12.0));
    let data = RecordingData::default().with_track_point(point);

    let row = StatKind::SpeedOrPace.render(&ctx, &data);
    assert_eq!(row.value, "5:00");
    assert_eq!(row.unit.as_deref(), Some("min/km"));
}

#[test]
fn test_average_paces_share_a_source() {
    let localizer = Localizer::english().unwrap();
    let zones = HeartRateZones::default();
    let ctx = RenderContext::new(UnitSystem::Metric, &zones, &localizer);
    let data = RecordingData::from_statistics(TrackStatistics {
        average_speed: Speed::from_kmh(8.0),
        average_moving_speed: Speed::from_kmh(12.0),
        ..Default::default()
    });

    let moving = StatKind::AverageMovingPace.render(&ctx, &data);
    let overall = StatKind::AveragePace.render(&ctx, &data);

    assert_eq!(moving.value, "5:00");
    assert_eq!(moving.value, overall.value);
    assert_eq!(moving.unit, overall.unit);
    assert_ne!(moving.label, overall.label);
}

#[test]
fn test_speed_stats_ignore_pace_preference() {
    let localizer = Localizer::english().unwrap();
    let zones = HeartRateZones::default();
    let ctx =
        RenderContext::new(UnitSystem::Metric, &zones, &localizer).with_report_speed(false);
    let data = RecordingData::from_statistics(TrackStatistics {
        max_speed: Speed::from_mps(10.0),
        ..Default::default()
    });

    let max = StatKind::MaxSpeed.render(&ctx, &data);
    assert_eq!(max.value, "36.0");
    assert_eq!(max.unit.as_deref(), Some("km/h"));

    let fastest = StatKind::FastestPace.render(&ctx, &data);
    assert_eq!(fastest.value, "1:40");
    assert_eq!(fastest.unit.as_deref(), Some("min/km"));
}

// =============================================================================
// Heart rate coloring
// =============================================================================

#[test]
fn test_heart_rate_color_follows_zones() {
    let localizer = Localizer::english().unwrap();
    let data = heart_rate(140.0);

    // Defaults put zone 2 at 138-151 bpm
    let default_zones = HeartRateZones::default();
    let ctx = RenderContext::new(UnitSystem::Metric, &default_zones, &localizer);
    let row = StatKind::HeartRate.render(&ctx, &data);
    assert_eq!(row.value, "140");
    assert_eq!(row.secondary.as_deref(), Some("Polar H10"));
    assert_eq!(row.value_color, Some(HR_ZONE_COLORS[1]));

    // Same reading, zones from a higher max HR: zone 1 is 130-144 bpm
    let raised_zones = HeartRateZones::from_hr(200, 60);
    let ctx = RenderContext::new(UnitSystem::Metric, &raised_zones, &localizer);
    let row = StatKind::HeartRate.render(&ctx, &data);
    assert_eq!(row.value_color, Some(HR_ZONE_COLORS[0]));
}

// =============================================================================
// Localization
// =============================================================================

#[test]
fn test_labels_follow_language() {
    let localizer = Localizer::new(Language::German).unwrap();
    let zones = HeartRateZones::default();
    let ctx = RenderContext::new(UnitSystem::Metric, &zones, &localizer);
    let data = RecordingData::from_statistics(TrackStatistics {
        total_distance_m: 5000.0,
        ..Default::default()
    });

    let row = StatKind::Distance.render(&ctx, &data);
    assert_eq!(row.value, "5,0");
    assert_eq!(row.label, "Distanz");

    let coords = StatKind::Coordinates.render(&ctx, &RecordingData::default());
    assert_eq!(coords.value, "unbekannt");
}

// =============================================================================
// Views and lists
// =============================================================================

#[test]
fn test_render_is_idempotent() {
    let localizer = Localizer::english().unwrap();
    let zones = HeartRateZones::default();
    let ctx = RenderContext::new(UnitSystem::Metric, &zones, &localizer);
    let data = heart_rate(162.0);

    let mut view = StatsRowView::new(StatKind::HeartRate);
    assert!(view.content().is_none());

    view.on_changed(&ctx, &data);
    let first = view.content().cloned();
    view.on_changed(&ctx, &data);

    assert!(first.is_some());
    assert_eq!(view.content().cloned(), first);
}

#[test]
fn test_primary_field_styling() {
    let view = StatsRowView::from_field(&DataField::new(StatKind::Distance).primary().wide());

    assert_eq!(view.style(), RowStyle::for_primary(true));
    assert_eq!(view.style().value, TextAppearance::PrimaryValue);
    assert!(view.is_wide());

    let plain = StatsRowView::from_field(&DataField::new(StatKind::Cadence));
    assert_eq!(plain.style().header, TextAppearance::SecondaryHeader);
    assert!(!plain.is_wide());
}

#[test]
fn test_list_renders_visible_fields() {
    let localizer = Localizer::english().unwrap();
    let zones = HeartRateZones::default();
    let ctx = RenderContext::new(UnitSystem::Metric, &zones, &localizer);
    let layout = RecordingLayout {
        name: "Test".to_string(),
        columns: 3,
        fields: vec![
            DataField::new(StatKind::Distance),
            DataField::new(StatKind::Gain).hidden(),
            DataField::new(StatKind::HeartRate),
        ],
    };

    let mut list = StatsList::from_layout(&layout);
    assert_eq!(list.len(), 2);
    assert_eq!(list.columns(), 3);

    list.on_changed(&ctx, &RecordingData::default());
    let kinds: Vec<StatKind> = list.rows().iter().map(|row| row.kind()).collect();
    assert_eq!(kinds, vec![StatKind::Distance, StatKind::HeartRate]);
    assert!(list.rows().iter().all(|row| row.content().is_some()));
}
