//! Row content, row styling and the row binding contract.

use super::field::{DataField, StatKind};
use crate::i18n::Localizer;
use crate::metrics::zones::{Color, HeartRateZones};
use crate::recording::RecordingData;
use crate::storage::config::UnitSystem;

/// Everything a render pass needs besides the snapshot.
///
/// Built by the caller from the current preferences for each notification,
/// so preference changes apply on the next render.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub units: UnitSystem,
    /// Speed row shows speed when true, pace otherwise
    pub report_speed: bool,
    pub hr_zones: &'a HeartRateZones,
    pub localizer: &'a Localizer,
}

impl<'a> RenderContext<'a> {
    pub fn new(units: UnitSystem, hr_zones: &'a HeartRateZones, localizer: &'a Localizer) -> Self {
        Self {
            units,
            report_speed: true,
            hr_zones,
            localizer,
        }
    }

    pub fn with_report_speed(mut self, report_speed: bool) -> Self {
        self.report_speed = report_speed;
        self
    }
}

/// Text shown by one statistics row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    pub value: String,
    pub unit: Option<String>,
    /// Main description
    pub label: String,
    /// Second description line (sensor name, altitude reference)
    pub secondary: Option<String>,
    /// Value text color overriding the theme
    pub value_color: Option<Color>,
}

impl RenderedRow {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            unit: None,
            label: label.into(),
            secondary: None,
            value_color: None,
        }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn with_secondary(mut self, secondary: Option<String>) -> Self {
        self.secondary = secondary;
        self
    }

    pub fn with_value_color(mut self, color: Color) -> Self {
        self.value_color = Some(color);
        self
    }
}

/// Text appearances a row slot can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAppearance {
    PrimaryValue,
    SecondaryValue,
    PrimaryHeader,
    SecondaryHeader,
}

impl TextAppearance {
    /// Font size in points.
    pub fn size(&self) -> f32 {
        match self {
            TextAppearance::PrimaryValue => 42.0,
            TextAppearance::SecondaryValue => 28.0,
            TextAppearance::PrimaryHeader => 15.0,
            TextAppearance::SecondaryHeader => 12.0,
        }
    }
}

/// Emphasis of a row's value and label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowStyle {
    pub value: TextAppearance,
    pub header: TextAppearance,
}

impl Default for RowStyle {
    fn default() -> Self {
        Self::for_primary(false)
    }
}

impl RowStyle {
    pub fn for_primary(primary: bool) -> Self {
        if primary {
            Self {
                value: TextAppearance::PrimaryValue,
                header: TextAppearance::PrimaryHeader,
            }
        } else {
            Self {
                value: TextAppearance::SecondaryValue,
                header: TextAppearance::SecondaryHeader,
            }
        }
    }
}

/// Receives data-changed notifications from the recording pipeline.
pub trait RecordingDataObserver {
    fn on_changed(&mut self, ctx: &RenderContext<'_>, data: &RecordingData);
}

/// One row of the statistics list: a statistic kind, its styling and the
/// content of the last render.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsRowView {
    kind: StatKind,
    style: RowStyle,
    wide: bool,
    content: Option<RenderedRow>,
}

impl StatsRowView {
    pub fn new(kind: StatKind) -> Self {
        Self {
            kind,
            style: RowStyle::default(),
            wide: false,
            content: None,
        }
    }

    /// Create a view for a layout field and configure it.
    pub fn from_field(field: &DataField) -> Self {
        let mut view = Self::new(field.key);
        view.configure(field);
        view
    }

    /// Apply the field's emphasis. Only styling changes.
    pub fn configure(&mut self, field: &DataField) {
        self.style = RowStyle::for_primary(field.is_primary());
        self.wide = field.wide;
    }

    pub fn kind(&self) -> StatKind {
        self.kind
    }

    pub fn style(&self) -> RowStyle {
        self.style
    }

    pub fn is_wide(&self) -> bool {
        self.wide
    }

    /// Content of the last render, if any.
    pub fn content(&self) -> Option<&RenderedRow> {
        self.content.as_ref()
    }
}

impl RecordingDataObserver for StatsRowView {
    fn on_changed(&mut self, ctx: &RenderContext<'_>, data: &RecordingData) {
        self.content = Some(self.kind.render(ctx, data));
    }
}
