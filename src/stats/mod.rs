//! Statistics rows: what each row shows and how it is rendered.
//!
//! A row is rendered from a [`RenderContext`] (unit system, speed/pace
//! preference, heart rate zones, localizer) and a [`RecordingData`]
//! snapshot. Rendering is pure; [`StatsRowView`] and [`StatsList`] only
//! keep the result of the latest render around for drawing.
//!
//! [`RecordingData`]: crate::recording::RecordingData

pub mod field;
pub mod list;
pub mod render;
pub mod row;

pub use field::{DataField, RecordingLayout, StatKind};
pub use list::StatsList;
pub use row::{
    RecordingDataObserver, RenderContext, RenderedRow, RowStyle, StatsRowView, TextAppearance,
};
