//! UI widgets for reusable components.

pub mod stats_row;

pub use stats_row::StatsRowWidget;
