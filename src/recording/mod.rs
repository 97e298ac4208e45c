//! Recording snapshot model and snapshot file loading.

pub mod types;

pub use types::{
    Altitude, AltitudeReference, Position, RecordingData, SensorDataSet, SensorReading,
    SnapshotError, Speed, TrackPoint, TrackStatistics,
};

use std::path::Path;

/// Load a recording snapshot from a TOML file.
pub fn load_snapshot(path: &Path) -> Result<RecordingData, SnapshotError> {
    let content = std::fs::read_to_string(path)?;
    let data = parse_snapshot(&content)?;
    tracing::info!("Loaded recording snapshot from {}", path.display());
    Ok(data)
}

/// Parse a recording snapshot from TOML text.
pub fn parse_snapshot(content: &str) -> Result<RecordingData, SnapshotError> {
    Ok(toml::from_str(content)?)
}
