//! User interface: theme and the statistics row widget.

pub mod theme;
pub mod widgets;

pub use theme::Theme;
pub use widgets::StatsRowWidget;
