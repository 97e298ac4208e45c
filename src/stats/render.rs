//! One render function per statistic kind.
//!
//! Each function reads a single field of the snapshot, formats it and
//! returns the row. None of them can fail: absent data renders the
//! placeholder.

use super::field::StatKind;
use super::row::{RenderContext, RenderedRow};
use crate::format::{self, DistanceFormatter, SpeedFormatter, ValueAndUnit};
use crate::recording::{RecordingData, Speed};

impl StatKind {
    /// Render this statistic from a snapshot.
    pub fn render(&self, ctx: &RenderContext<'_>, data: &RecordingData) -> RenderedRow {
        match self {
            StatKind::Distance => distance(ctx, data),
            StatKind::TotalTime => elapsed(ctx, data.track_statistics.total_time, *self),
            StatKind::MovingTime => elapsed(ctx, data.track_statistics.moving_time, *self),
            StatKind::SpeedOrPace => speed_or_pace(ctx, data),
            StatKind::AverageMovingSpeed => {
                speed_stat(ctx, data.track_statistics.average_moving_speed, true, *self)
            }
            StatKind::AverageSpeed => {
                speed_stat(ctx, data.track_statistics.average_speed, true, *self)
            }
            StatKind::MaxSpeed => speed_stat(ctx, data.track_statistics.max_speed, true, *self),
            // Both average paces read the moving average.
            StatKind::AverageMovingPace | StatKind::AveragePace => {
                speed_stat(ctx, data.track_statistics.average_moving_speed, false, *self)
            }
            StatKind::FastestPace => {
                speed_stat(ctx, data.track_statistics.max_speed, false, *self)
            }
            StatKind::Altitude => altitude(ctx, data),
            StatKind::Gain => {
                altitude_change(ctx, data.track_statistics.total_altitude_gain_m, *self)
            }
            StatKind::Loss => {
                altitude_change(ctx, data.track_statistics.total_altitude_loss_m, *self)
            }
            StatKind::Coordinates => coordinates(ctx, data),
            StatKind::HeartRate => heart_rate(ctx, data),
            StatKind::Cadence => cadence(ctx, data),
            StatKind::Power => power(ctx, data),
        }
    }
}

fn label(ctx: &RenderContext<'_>, kind: StatKind) -> String {
    ctx.localizer.text(kind.label_key())
}

fn from_parts(parts: ValueAndUnit, label: String) -> RenderedRow {
    RenderedRow::new(parts.value, label).with_unit(parts.unit)
}

fn distance(ctx: &RenderContext<'_>, data: &RecordingData) -> RenderedRow {
    let parts = DistanceFormatter::new(ctx.units)
        .distance_parts(data.track_statistics.total_distance_m, ctx.localizer);
    from_parts(parts, label(ctx, StatKind::Distance))
}

fn elapsed(ctx: &RenderContext<'_>, time: std::time::Duration, kind: StatKind) -> RenderedRow {
    RenderedRow::new(format::format_elapsed_time(time), label(ctx, kind))
}

/// Sensor speed wins over GPS speed. The label names the sensor, or the
/// GPS when no speed sensor reports.
fn speed_or_pace(ctx: &RenderContext<'_>, data: &RecordingData) -> RenderedRow {
    let formatter = SpeedFormatter::new(ctx.units).with_report_speed(ctx.report_speed);

    let sensor_speed = data
        .sensor_data_set
        .as_ref()
        .and_then(|sensors| sensors.speed.as_ref());

    match sensor_speed {
        Some(reading) => from_parts(
            formatter.speed_parts(Some(reading.value), ctx.localizer),
            reading.source.clone(),
        ),
        None => {
            let speed = data
                .latest_track_point
                .as_ref()
                .and_then(|point| point.speed);
            from_parts(
                formatter.speed_parts(speed, ctx.localizer),
                label(ctx, StatKind::SpeedOrPace),
            )
        }
    }
}

fn speed_stat(
    ctx: &RenderContext<'_>,
    speed: Speed,
    report_speed: bool,
    kind: StatKind,
) -> RenderedRow {
    let parts = SpeedFormatter::new(ctx.units)
        .with_report_speed(report_speed)
        .speed_parts(Some(speed), ctx.localizer);
    from_parts(parts, label(ctx, kind))
}

fn altitude(ctx: &RenderContext<'_>, data: &RecordingData) -> RenderedRow {
    let altitude = data
        .latest_track_point
        .as_ref()
        .and_then(|point| point.altitude);

    let parts = format::altitude_parts(altitude.map(|a| a.meters), ctx.units, ctx.localizer);
    let reference = altitude.map(|a| ctx.localizer.text(a.reference.label_key()));
    from_parts(parts, label(ctx, StatKind::Altitude)).with_secondary(reference)
}

fn altitude_change(ctx: &RenderContext<'_>, meters: Option<f64>, kind: StatKind) -> RenderedRow {
    let parts = format::altitude_parts(meters, ctx.units, ctx.localizer);
    from_parts(parts, label(ctx, kind))
}

fn coordinates(ctx: &RenderContext<'_>, data: &RecordingData) -> RenderedRow {
    let value = match data
        .latest_track_point
        .as_ref()
        .and_then(|point| point.position)
    {
        Some(position) => {
            format::format_coordinate(position.latitude, position.longitude, ctx.localizer)
        }
        None => ctx.localizer.text("value-unknown"),
    };
    RenderedRow::new(value, label(ctx, StatKind::Coordinates))
}

/// Value color comes from the zones in the context on every call.
fn heart_rate(ctx: &RenderContext<'_>, data: &RecordingData) -> RenderedRow {
    let reading = data
        .sensor_data_set
        .as_ref()
        .and_then(|sensors| sensors.heart_rate.as_ref());

    let bpm = reading.map(|r| r.value);
    let sensor_name = reading
        .map(|r| r.source.clone())
        .unwrap_or_else(|| ctx.localizer.text("value-unknown"));

    from_parts(
        format::heart_rate_parts(bpm, ctx.localizer),
        label(ctx, StatKind::HeartRate),
    )
    .with_secondary(Some(sensor_name))
    .with_value_color(ctx.hr_zones.text_color_for(bpm))
}

fn cadence(ctx: &RenderContext<'_>, data: &RecordingData) -> RenderedRow {
    let reading = data
        .sensor_data_set
        .as_ref()
        .and_then(|sensors| sensors.cadence.as_ref());

    let sensor_name = reading
        .map(|r| r.source.clone())
        .unwrap_or_else(|| ctx.localizer.text("value-unknown"));

    from_parts(
        format::cadence_parts(reading.map(|r| r.value), ctx.localizer),
        label(ctx, StatKind::Cadence),
    )
    .with_secondary(Some(sensor_name))
}

/// Without a power meter the row shows the cadence placeholder.
fn power(ctx: &RenderContext<'_>, data: &RecordingData) -> RenderedRow {
    let reading = data
        .sensor_data_set
        .as_ref()
        .and_then(|sensors| sensors.cycling_power.as_ref());

    let (parts, sensor_name) = match reading {
        Some(r) => (
            format::power_parts(Some(r.value), ctx.localizer),
            r.source.clone(),
        ),
        None => (
            format::cadence_parts(None, ctx.localizer),
            ctx.localizer.text("value-unknown"),
        ),
    };

    from_parts(parts, label(ctx, StatKind::Power)).with_secondary(Some(sensor_name))
}
