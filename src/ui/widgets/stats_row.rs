//! Statistics row widget.

use crate::stats::StatsRowView;
use crate::ui::theme::{to_color32, Theme};
use egui::{Align, Layout, RichText, Ui, Vec2};

/// Draws the last rendered content of a [`StatsRowView`].
pub struct StatsRowWidget<'a> {
    view: &'a StatsRowView,
    theme: Theme,
}

impl<'a> StatsRowWidget<'a> {
    pub fn new(view: &'a StatsRowView) -> Self {
        Self {
            view,
            theme: Theme::default(),
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Render the row. Rows that were never rendered draw an empty card.
    pub fn show(self, ui: &mut Ui) {
        let style = self.view.style();
        let min_height = style.value.size() + style.header.size() * 2.0 + 16.0;

        egui::Frame::new()
            .fill(self.theme.card_bg())
            .inner_margin(8.0)
            .corner_radius(6.0)
            .show(ui, |ui| {
                ui.set_min_size(Vec2::new(ui.available_width(), min_height));

                let Some(row) = self.view.content() else {
                    return;
                };

                ui.with_layout(Layout::top_down(Align::Min), |ui| {
                    ui.horizontal(|ui| {
                        let value_color = row
                            .value_color
                            .map(to_color32)
                            .unwrap_or_else(|| self.theme.text_primary());
                        ui.label(
                            RichText::new(&row.value)
                                .size(style.value.size())
                                .strong()
                                .color(value_color),
                        );
                        if let Some(unit) = row.unit.as_deref().filter(|u| !u.is_empty()) {
                            ui.label(
                                RichText::new(unit)
                                    .size(style.header.size())
                                    .color(self.theme.text_secondary()),
                            );
                        }
                    });

                    ui.label(
                        RichText::new(&row.label)
                            .size(style.header.size())
                            .color(self.theme.text_secondary()),
                    );

                    if let Some(secondary) = &row.secondary {
                        ui.label(
                            RichText::new(secondary)
                                .size(style.header.size() * 0.85)
                                .weak(),
                        );
                    }
                });
            });
    }
}
