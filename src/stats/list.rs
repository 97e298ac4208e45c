//! The list of statistics rows built from a recording layout.

use super::field::RecordingLayout;
use super::row::{RecordingDataObserver, RenderContext, StatsRowView};
use crate::recording::RecordingData;

/// Row views for the visible fields of a layout.
#[derive(Debug, Clone, Default)]
pub struct StatsList {
    rows: Vec<StatsRowView>,
    columns: usize,
}

impl StatsList {
    /// Create and configure one row per visible field.
    pub fn from_layout(layout: &RecordingLayout) -> Self {
        let rows: Vec<StatsRowView> = layout
            .visible_fields()
            .map(StatsRowView::from_field)
            .collect();
        tracing::debug!(
            "Built statistics list '{}' with {} rows",
            layout.name,
            rows.len()
        );
        Self {
            rows,
            columns: layout.columns.max(1),
        }
    }

    pub fn rows(&self) -> &[StatsRowView] {
        &self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl RecordingDataObserver for StatsList {
    fn on_changed(&mut self, ctx: &RenderContext<'_>, data: &RecordingData) {
        for row in &mut self.rows {
            row.on_changed(ctx, data);
        }
        tracing::debug!("Rendered {} statistics rows", self.rows.len());
    }
}
