//! UI theme definitions.

use crate::metrics::zones::Color;
use egui::{Color32, Visuals};

/// Theme configuration for the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Get the egui Visuals for this theme.
    pub fn visuals(&self) -> Visuals {
        match self {
            Theme::Dark => dark_visuals(),
            Theme::Light => light_visuals(),
        }
    }

    /// Card background of a statistics row.
    pub fn card_bg(&self) -> Color32 {
        match self {
            Theme::Dark => DarkTheme::CARD_BG,
            Theme::Light => LightTheme::CARD_BG,
        }
    }

    /// Value text when the row sets no color.
    pub fn text_primary(&self) -> Color32 {
        match self {
            Theme::Dark => DarkTheme::TEXT_PRIMARY,
            Theme::Light => LightTheme::TEXT_PRIMARY,
        }
    }

    /// Labels and units.
    pub fn text_secondary(&self) -> Color32 {
        match self {
            Theme::Dark => DarkTheme::TEXT_SECONDARY,
            Theme::Light => LightTheme::TEXT_SECONDARY,
        }
    }
}

/// Convert a zone color for drawing.
pub fn to_color32(color: Color) -> Color32 {
    let [r, g, b] = color.to_egui();
    Color32::from_rgb(r, g, b)
}

/// Dark theme colors.
pub struct DarkTheme;

impl DarkTheme {
    /// Background color
    pub const BACKGROUND: Color32 = Color32::from_rgb(18, 18, 24);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgb(28, 28, 36);
    /// Card background
    pub const CARD_BG: Color32 = Color32::from_rgb(38, 38, 48);
    /// Primary text
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
    /// Secondary text
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 160, 170);
    /// Accent color (blue)
    pub const ACCENT: Color32 = Color32::from_rgb(66, 133, 244);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(60, 60, 70);
}

/// Light theme colors.
pub struct LightTheme;

impl LightTheme {
    /// Background color
    pub const BACKGROUND: Color32 = Color32::from_rgb(250, 250, 252);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgb(255, 255, 255);
    /// Card background
    pub const CARD_BG: Color32 = Color32::from_rgb(245, 245, 248);
    /// Primary text
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(32, 32, 40);
    /// Secondary text
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(96, 96, 104);
    /// Accent color (blue)
    pub const ACCENT: Color32 = Color32::from_rgb(26, 115, 232);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(218, 218, 224);
}

/// Create dark theme visuals.
fn dark_visuals() -> Visuals {
    let mut visuals = Visuals::dark();

    visuals.window_fill = DarkTheme::PANEL_BG;
    visuals.panel_fill = DarkTheme::PANEL_BG;
    visuals.faint_bg_color = DarkTheme::CARD_BG;
    visuals.extreme_bg_color = DarkTheme::BACKGROUND;

    visuals.widgets.noninteractive.bg_fill = DarkTheme::CARD_BG;
    visuals.widgets.active.bg_fill = DarkTheme::ACCENT;
    visuals.selection.bg_fill = DarkTheme::ACCENT.linear_multiply(0.4);

    visuals.widgets.noninteractive.fg_stroke.color = DarkTheme::TEXT_PRIMARY;
    visuals.widgets.noninteractive.bg_stroke.color = DarkTheme::BORDER;

    visuals
}

/// Create light theme visuals.
fn light_visuals() -> Visuals {
    let mut visuals = Visuals::light();

    visuals.window_fill = LightTheme::PANEL_BG;
    visuals.panel_fill = LightTheme::PANEL_BG;
    visuals.faint_bg_color = LightTheme::CARD_BG;
    visuals.extreme_bg_color = LightTheme::BACKGROUND;

    visuals.widgets.noninteractive.bg_fill = LightTheme::CARD_BG;
    visuals.widgets.active.bg_fill = LightTheme::ACCENT;
    visuals.selection.bg_fill = LightTheme::ACCENT.linear_multiply(0.2);

    visuals.widgets.noninteractive.fg_stroke.color = LightTheme::TEXT_PRIMARY;
    visuals.widgets.noninteractive.bg_stroke.color = LightTheme::BORDER;

    visuals
}
