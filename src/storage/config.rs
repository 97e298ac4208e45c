//! Display preferences and application configuration.
//!
//! The configuration is a TOML file under the platform data directory.
//! Rendering never reads it directly: callers derive a render context from
//! it and pass that into every render.

use crate::i18n::{self, Language};
use crate::metrics::zones::{HeartRateZones, DEFAULT_MAX_HR, DEFAULT_RESTING_HR};
use crate::stats::field::RecordingLayout;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Unit system preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitSystem {
    /// Metric units (km, km/h, m)
    #[default]
    Metric,
    /// Imperial units with feet for short distances and altitude
    ImperialFeet,
    /// Imperial units with meters for short distances and altitude
    ImperialMeter,
    /// Nautical miles and knots, feet for altitude
    NauticalImperial,
}

impl UnitSystem {
    /// Get all unit systems.
    pub fn all() -> &'static [UnitSystem] {
        &[
            UnitSystem::Metric,
            UnitSystem::ImperialFeet,
            UnitSystem::ImperialMeter,
            UnitSystem::NauticalImperial,
        ]
    }

    /// Translation key of the unit system name.
    pub fn label_key(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "unit-system-metric",
            UnitSystem::ImperialFeet => "unit-system-imperial-feet",
            UnitSystem::ImperialMeter => "unit-system-imperial-meter",
            UnitSystem::NauticalImperial => "unit-system-nautical-imperial",
        }
    }
}

/// User-configured zone bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomZones {
    /// Lower bound of zone 1 in bpm
    pub z1_min: u8,
    /// Upper bound of zones 1 through 5 in bpm
    pub upper: [u8; 5],
}

/// Heart rate preferences the zones are derived from.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HeartRateSettings {
    /// Maximum heart rate in bpm
    pub max_hr: Option<u8>,
    /// Resting heart rate in bpm
    pub resting_hr: Option<u8>,
    /// Explicit zone bounds, overriding max/resting
    pub custom_zones: Option<CustomZones>,
}

impl HeartRateSettings {
    /// Update heart rate values. Rejects a max at or below resting.
    pub fn set_heart_rate(
        &mut self,
        max_hr: Option<u8>,
        resting_hr: Option<u8>,
    ) -> Result<(), &'static str> {
        if let (Some(max), Some(rest)) = (max_hr, resting_hr) {
            if max <= rest {
                return Err("Max heart rate must be above resting heart rate");
            }
        }
        self.max_hr = max_hr;
        self.resting_hr = resting_hr;
        Ok(())
    }

    /// Derive zones from the current settings.
    pub fn zones(&self) -> HeartRateZones {
        if let Some(custom) = &self.custom_zones {
            return HeartRateZones::from_bounds(custom.z1_min, custom.upper);
        }

        let max = self.max_hr.unwrap_or(DEFAULT_MAX_HR);
        let rest = self.resting_hr.unwrap_or(DEFAULT_RESTING_HR);
        if max > rest {
            HeartRateZones::from_hr(max, rest)
        } else {
            HeartRateZones::default()
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Application version
    pub version: String,
    /// Unit preference
    pub units: UnitSystem,
    /// Speed/pace row shows speed when true, pace otherwise
    pub report_speed: bool,
    /// Language identifier; the system locale is used when absent
    pub language: Option<String>,
    /// Heart rate zone settings
    pub heart_rate: HeartRateSettings,
    /// Rows shown while recording
    pub layout: RecordingLayout,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            units: UnitSystem::Metric,
            report_speed: true,
            language: None,
            heart_rate: HeartRateSettings::default(),
            layout: RecordingLayout::default(),
        }
    }
}

impl AppConfig {
    /// Heart rate zones as currently configured. Computed on every call.
    pub fn hr_zones(&self) -> HeartRateZones {
        self.heart_rate.zones()
    }

    /// Configured language, or the system language.
    pub fn language(&self) -> Language {
        match &self.language {
            Some(id) => Language::negotiate(id),
            None => i18n::detect_system_locale(),
        }
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = Some(language.id().to_string());
    }
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "trackrows", "TrackRows")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    get_data_dir().join("config.toml")
}

/// Load application configuration from a file. A missing file yields
/// the defaults.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        tracing::info!("No config at {}, using defaults", path.display());
        return Ok(AppConfig::default());
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    let config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

    tracing::info!("Loaded config from {}", path.display());
    Ok(config)
}

/// Save application configuration to a file.
pub fn save_config_to(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content =
        toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}
