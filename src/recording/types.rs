//! Snapshot types describing the current state of a recording.
//!
//! Everything here is produced by the recording pipeline and only read by
//! the statistics rows. Values are stored in SI units (meters, meters per
//! second) and converted at format time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Speed in meters per second.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Speed(f64);

impl Speed {
    /// Create a speed from meters per second.
    pub const fn from_mps(mps: f64) -> Self {
        Self(mps)
    }

    /// Create a speed from kilometers per hour.
    pub fn from_kmh(kmh: f64) -> Self {
        Self(kmh / 3.6)
    }

    /// Speed in meters per second.
    pub fn to_mps(self) -> f64 {
        self.0
    }

    /// Whether a pace can be derived from this speed.
    pub fn is_moving(self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }
}

/// Vertical datum an altitude is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AltitudeReference {
    /// Height above the WGS84 ellipsoid (raw GPS)
    #[default]
    Wgs84,
    /// Height above the EGM2008 geoid (mean sea level)
    Egm2008,
}

impl AltitudeReference {
    /// Translation key of the human-readable reference name.
    pub fn label_key(&self) -> &'static str {
        match self {
            AltitudeReference::Wgs84 => "altitude-reference-wgs84",
            AltitudeReference::Egm2008 => "altitude-reference-egm2008",
        }
    }
}

/// An altitude together with its vertical datum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Altitude {
    /// Altitude in meters
    pub meters: f64,
    /// Vertical datum
    #[serde(default)]
    pub reference: AltitudeReference,
}

/// A WGS84 position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

/// Most recent sample point of the recording.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackPoint {
    /// When the point was recorded
    pub time: DateTime<Utc>,
    /// Location fix, absent until the GPS has one
    #[serde(default)]
    pub position: Option<Position>,
    /// Altitude, absent without an altitude source
    #[serde(default)]
    pub altitude: Option<Altitude>,
    /// GPS speed
    #[serde(default)]
    pub speed: Option<Speed>,
}

impl TrackPoint {
    /// Create a point without position, altitude or speed.
    pub fn new(time: DateTime<Utc>) -> Self {
        Self {
            time,
            position: None,
            altitude: None,
            speed: None,
        }
    }

    pub fn has_location(&self) -> bool {
        self.position.is_some()
    }

    pub fn has_altitude(&self) -> bool {
        self.altitude.is_some()
    }

    pub fn has_speed(&self) -> bool {
        self.speed.is_some()
    }
}

/// Aggregated statistics of the recording so far.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackStatistics {
    /// Total distance in meters
    pub total_distance_m: f64,
    /// Wall-clock time since the recording started
    pub total_time: Duration,
    /// Time spent moving
    pub moving_time: Duration,
    /// Average speed over total time
    pub average_speed: Speed,
    /// Average speed over moving time
    pub average_moving_speed: Speed,
    /// Fastest speed seen
    pub max_speed: Speed,
    /// Cumulative climb in meters
    pub total_altitude_gain_m: Option<f64>,
    /// Cumulative descent in meters
    pub total_altitude_loss_m: Option<f64>,
}

/// A sensor value tagged with the sensor it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReading<T> {
    pub value: T,
    /// Sensor name, or its address when it has no name
    pub source: String,
}

impl<T> SensorReading<T> {
    pub fn new(value: T, source: impl Into<String>) -> Self {
        Self {
            value,
            source: source.into(),
        }
    }
}

/// Latest readings of all connected sensors.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SensorDataSet {
    /// Heart rate in bpm
    pub heart_rate: Option<SensorReading<f32>>,
    /// Cadence in rpm
    pub cadence: Option<SensorReading<f32>>,
    /// Wheel or foot-pod speed
    pub speed: Option<SensorReading<Speed>>,
    /// Cycling power in watts
    pub cycling_power: Option<SensorReading<f32>>,
}

/// Read-only view of the recording at one instant.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordingData {
    pub track_statistics: TrackStatistics,
    pub latest_track_point: Option<TrackPoint>,
    pub sensor_data_set: Option<SensorDataSet>,
}

impl RecordingData {
    /// Snapshot carrying only aggregated statistics.
    pub fn from_statistics(track_statistics: TrackStatistics) -> Self {
        Self {
            track_statistics,
            ..Default::default()
        }
    }

    pub fn with_track_point(mut self, point: TrackPoint) -> Self {
        self.latest_track_point = Some(point);
        self
    }

    pub fn with_sensor_data(mut self, sensors: SensorDataSet) -> Self {
        self.sensor_data_set = Some(sensors);
        self
    }
}

/// Errors raised while loading a snapshot from disk.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}
