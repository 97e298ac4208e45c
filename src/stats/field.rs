//! Statistic kinds and the recording layout made of them.

use serde::{Deserialize, Serialize};

/// One statistic a row can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    /// Total distance
    Distance,
    /// Total elapsed time
    TotalTime,
    /// Time spent moving
    MovingTime,
    /// Current speed, from a speed sensor or the GPS
    SpeedOrPace,
    /// Average speed while moving
    AverageMovingSpeed,
    /// Average speed over total time
    AverageSpeed,
    /// Fastest speed
    MaxSpeed,
    /// Average pace while moving
    AverageMovingPace,
    /// Average pace
    AveragePace,
    /// Fastest pace
    FastestPace,
    /// Current altitude
    Altitude,
    /// Total climb
    Gain,
    /// Total descent
    Loss,
    /// Current position
    Coordinates,
    /// Current heart rate
    HeartRate,
    /// Current cadence
    Cadence,
    /// Current cycling power
    Power,
}

impl StatKind {
    /// Get all statistic kinds.
    pub fn all() -> &'static [StatKind] {
        &[
            StatKind::Distance,
            StatKind::TotalTime,
            StatKind::MovingTime,
            StatKind::SpeedOrPace,
            StatKind::AverageMovingSpeed,
            StatKind::AverageSpeed,
            StatKind::MaxSpeed,
            StatKind::AverageMovingPace,
            StatKind::AveragePace,
            StatKind::FastestPace,
            StatKind::Altitude,
            StatKind::Gain,
            StatKind::Loss,
            StatKind::Coordinates,
            StatKind::HeartRate,
            StatKind::Cadence,
            StatKind::Power,
        ]
    }

    /// Translation key of the row label. The speed row labels itself with
    /// its source instead.
    pub fn label_key(&self) -> &'static str {
        match self {
            StatKind::Distance => "stats-distance",
            StatKind::TotalTime => "stats-total-time",
            StatKind::MovingTime => "stats-moving-time",
            StatKind::SpeedOrPace => "description-speed-source-gps",
            StatKind::AverageMovingSpeed => "stats-average-moving-speed",
            StatKind::AverageSpeed => "stats-average-speed",
            StatKind::MaxSpeed => "stats-max-speed",
            StatKind::AverageMovingPace => "stats-average-moving-pace",
            StatKind::AveragePace => "stats-average-pace",
            StatKind::FastestPace => "stats-fastest-pace",
            StatKind::Altitude => "stats-altitude",
            StatKind::Gain => "stats-gain",
            StatKind::Loss => "stats-loss",
            StatKind::Coordinates => "stats-coordinates",
            StatKind::HeartRate => "stats-sensors-heart-rate",
            StatKind::Cadence => "stats-sensors-cadence",
            StatKind::Power => "stats-sensors-power",
        }
    }
}

/// A statistic placed in the recording layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataField {
    pub key: StatKind,
    #[serde(default = "default_true")]
    pub visible: bool,
    /// Primary fields are drawn with larger text
    #[serde(default)]
    pub primary: bool,
    /// Wide fields span the whole row of the grid
    #[serde(default)]
    pub wide: bool,
}

fn default_true() -> bool {
    true
}

impl DataField {
    pub fn new(key: StatKind) -> Self {
        Self {
            key,
            visible: true,
            primary: false,
            wide: false,
        }
    }

    pub fn primary(mut self) -> Self {
        self.primary = true;
        self
    }

    pub fn wide(mut self) -> Self {
        self.wide = true;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn is_primary(&self) -> bool {
        self.primary
    }
}

/// Ordered set of fields shown while recording.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordingLayout {
    pub name: String,
    /// Number of grid columns
    #[serde(default = "default_columns")]
    pub columns: usize,
    pub fields: Vec<DataField>,
}

fn default_columns() -> usize {
    2
}

impl Default for RecordingLayout {
    fn default() -> Self {
        Self {
            name: "Default".to_string(),
            columns: default_columns(),
            fields: vec![
                DataField::new(StatKind::MovingTime).primary(),
                DataField::new(StatKind::Distance).primary(),
                DataField::new(StatKind::SpeedOrPace).primary().wide(),
                DataField::new(StatKind::AverageMovingSpeed),
                DataField::new(StatKind::MaxSpeed),
                DataField::new(StatKind::AverageMovingPace).hidden(),
                DataField::new(StatKind::AveragePace).hidden(),
                DataField::new(StatKind::FastestPace).hidden(),
                DataField::new(StatKind::AverageSpeed).hidden(),
                DataField::new(StatKind::TotalTime),
                DataField::new(StatKind::Altitude),
                DataField::new(StatKind::Gain),
                DataField::new(StatKind::Loss),
                DataField::new(StatKind::HeartRate),
                DataField::new(StatKind::Cadence),
                DataField::new(StatKind::Power),
                DataField::new(StatKind::Coordinates).wide(),
            ],
        }
    }
}

impl RecordingLayout {
    /// Fields that are shown, in layout order.
    pub fn visible_fields(&self) -> impl Iterator<Item = &DataField> {
        self.fields.iter().filter(|field| field.visible)
    }

    /// Look up the field for a statistic.
    pub fn field(&self, key: StatKind) -> Option<&DataField> {
        self.fields.iter().find(|field| field.key == key)
    }
}
