//! Viewer application state and egui integration.

use anyhow::Context as _;
use eframe::egui;
use fluent::FluentArgs;
use std::path::PathBuf;

use trackrows::i18n::{Language, Localizer};
use trackrows::metrics::zones::{DEFAULT_MAX_HR, DEFAULT_RESTING_HR};
use trackrows::recording::{self, RecordingData};
use trackrows::stats::{RecordingDataObserver, RenderContext, StatsList, StatsRowView};
use trackrows::storage::config::{self, AppConfig, UnitSystem};
use trackrows::ui::{StatsRowWidget, Theme};

/// Main application state.
pub struct TrackRowsApp {
    /// Persisted preferences
    config: AppConfig,
    /// Where preference changes are saved
    config_path: PathBuf,
    /// Translations for the configured language
    localizer: Localizer,
    /// Snapshot file given on the command line
    snapshot_path: Option<PathBuf>,
    /// Snapshot currently displayed
    data: RecordingData,
    /// Rows of the configured layout
    list: StatsList,
    /// UI theme
    theme: Theme,
    /// Rows need a re-render before the next frame
    data_changed: bool,
    /// Last error shown to the user
    status: Option<String>,
}

impl TrackRowsApp {
    /// Create the app, loading config and the optional snapshot.
    pub fn new(snapshot_path: Option<PathBuf>) -> anyhow::Result<Self> {
        let config_path = config::get_config_path();
        let config = config::load_config_from(&config_path).unwrap_or_else(|e| {
            tracing::warn!("Failed to load config, using defaults: {}", e);
            AppConfig::default()
        });

        let data = match &snapshot_path {
            Some(path) => recording::load_snapshot(path)
                .with_context(|| format!("Failed to load snapshot {}", path.display()))?,
            None => RecordingData::default(),
        };

        Self::with_state(config, config_path, snapshot_path, data)
    }

    fn with_state(
        config: AppConfig,
        config_path: PathBuf,
        snapshot_path: Option<PathBuf>,
        data: RecordingData,
    ) -> anyhow::Result<Self> {
        let localizer = Localizer::new(config.language())?;
        let list = StatsList::from_layout(&config.layout);

        Ok(Self {
            config,
            config_path,
            localizer,
            snapshot_path,
            data,
            list,
            theme: Theme::default(),
            data_changed: true,
            status: None,
        })
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Re-render every row from the current preferences and snapshot.
    fn notify_data_changed(&mut self) {
        let zones = self.config.hr_zones();
        let ctx = RenderContext::new(self.config.units, &zones, &self.localizer)
            .with_report_speed(self.config.report_speed);
        self.list.on_changed(&ctx, &self.data);
        self.data_changed = false;
    }

    fn reload_snapshot(&mut self) {
        let Some(path) = &self.snapshot_path else {
            return;
        };

        match recording::load_snapshot(path) {
            Ok(data) => {
                self.data = data;
                self.status = None;
                self.data_changed = true;
            }
            Err(e) => {
                tracing::warn!("Failed to reload snapshot {}: {}", path.display(), e);
                self.status = Some(e.to_string());
            }
        }
    }

    fn set_language(&mut self, language: Language) {
        match Localizer::new(language) {
            Ok(localizer) => {
                self.localizer = localizer;
                self.config.set_language(language);
                self.preferences_changed();
            }
            Err(e) => {
                tracing::warn!("Failed to load language {}: {}", language.id(), e);
                self.status = Some(e.to_string());
            }
        }
    }

    /// Mark rows stale and persist the config. Clears any earlier
    /// settings error.
    fn preferences_changed(&mut self) {
        self.data_changed = true;
        self.status = None;
        if let Err(e) = config::save_config_to(&self.config, &self.config_path) {
            tracing::warn!("Failed to save config: {}", e);
        }
    }

    fn apply_heart_rate(&mut self, max_hr: u8, resting_hr: u8) {
        match self
            .config
            .heart_rate
            .set_heart_rate(Some(max_hr), Some(resting_hr))
        {
            Ok(()) => self.preferences_changed(),
            Err(e) => self.status = Some(e.to_string()),
        }
    }

    fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.theme = match self.theme {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        };
        ctx.set_visuals(self.theme.visuals());
    }

    /// Render the settings side panel.
    fn render_settings(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.localizer.text("settings-title"));
        ui.add_space(8.0);

        let mut units = self.config.units;
        ui.label(self.localizer.text("settings-units"));
        egui::ComboBox::from_id_salt("units")
            .selected_text(self.localizer.text(units.label_key()))
            .show_ui(ui, |ui| {
                for option in UnitSystem::all() {
                    ui.selectable_value(
                        &mut units,
                        *option,
                        self.localizer.text(option.label_key()),
                    );
                }
            });
        if units != self.config.units {
            self.config.units = units;
            self.preferences_changed();
        }

        let mut language = self.localizer.language();
        ui.label(self.localizer.text("settings-language"));
        egui::ComboBox::from_id_salt("language")
            .selected_text(language.display_name())
            .show_ui(ui, |ui| {
                for option in Language::all() {
                    ui.selectable_value(&mut language, *option, option.display_name());
                }
            });
        if language != self.localizer.language() {
            self.set_language(language);
        }

        ui.add_space(8.0);
        if ui
            .checkbox(
                &mut self.config.report_speed,
                self.localizer.text("settings-report-speed"),
            )
            .changed()
        {
            self.preferences_changed();
        }

        ui.add_space(8.0);
        let mut max_hr = self.config.heart_rate.max_hr.unwrap_or(DEFAULT_MAX_HR);
        let mut resting_hr = self
            .config
            .heart_rate
            .resting_hr
            .unwrap_or(DEFAULT_RESTING_HR);

        let mut hr_changed = false;
        ui.label(self.localizer.text("settings-max-hr"));
        hr_changed |= ui
            .add(egui::DragValue::new(&mut max_hr).range(100..=230).suffix(" bpm"))
            .changed();
        ui.label(self.localizer.text("settings-resting-hr"));
        hr_changed |= ui
            .add(egui::DragValue::new(&mut resting_hr).range(30..=120).suffix(" bpm"))
            .changed();

        if hr_changed {
            self.apply_heart_rate(max_hr, resting_hr);
        }

        if self.snapshot_path.is_some() {
            ui.add_space(16.0);
            if ui.button(self.localizer.text("action-reload")).clicked() {
                self.reload_snapshot();
            }
        }
    }

    fn render_status(&self, ui: &mut egui::Ui) {
        let text = match &self.data.latest_track_point {
            Some(point) => {
                let mut args = FluentArgs::new();
                args.set("time", point.time.format("%H:%M:%S").to_string());
                self.localizer.text_args("status-snapshot-time", &args)
            }
            None => self.localizer.text("status-no-snapshot"),
        };
        ui.label(egui::RichText::new(text).weak());

        if let Some(status) = &self.status {
            ui.colored_label(egui::Color32::from_rgb(234, 67, 53), status);
        }
    }

    /// Render the rows as a grid; wide rows take a line of their own.
    fn render_rows(&self, ui: &mut egui::Ui) {
        let columns = self.list.columns();
        let mut pending: Vec<&StatsRowView> = Vec::with_capacity(columns);

        for row in self.list.rows() {
            if row.is_wide() {
                show_row_group(ui, &pending, columns, self.theme);
                pending.clear();
                StatsRowWidget::new(row).with_theme(self.theme).show(ui);
                continue;
            }

            pending.push(row);
            if pending.len() == columns {
                show_row_group(ui, &pending, columns, self.theme);
                pending.clear();
            }
        }
        show_row_group(ui, &pending, columns, self.theme);
    }
}

fn show_row_group(ui: &mut egui::Ui, rows: &[&StatsRowView], columns: usize, theme: Theme) {
    if rows.is_empty() {
        return;
    }
    ui.columns(columns, |cols| {
        for (col, row) in cols.iter_mut().zip(rows) {
            StatsRowWidget::new(row).with_theme(theme).show(col);
        }
    });
}

impl eframe::App for TrackRowsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("TrackRows");

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let theme_icon = match self.theme {
                        Theme::Dark => "🌙",
                        Theme::Light => "☀",
                    };
                    if ui.button(theme_icon).clicked() {
                        self.toggle_theme(ctx);
                    }
                });
            });
        });

        egui::SidePanel::left("settings_panel")
            .resizable(false)
            .show(ctx, |ui| self.render_settings(ui));

        if self.data_changed {
            self.notify_data_changed();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_status(ui);
            ui.add_space(8.0);
            egui::ScrollArea::vertical().show(ui, |ui| self.render_rows(ui));
        });
    }
}
