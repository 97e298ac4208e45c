//! TrackRows - Live Recording Statistics Rows
//!
//! Desktop viewer showing the statistics rows of a recording snapshot.
//! Usage: `trackrows [snapshot.toml]`

use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod app;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting TrackRows v{}", env!("CARGO_PKG_VERSION"));

    let snapshot_path = std::env::args_os().nth(1).map(std::path::PathBuf::from);
    let app = app::TrackRowsApp::new(snapshot_path)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 900.0])
            .with_min_inner_size([420.0, 480.0])
            .with_title("TrackRows"),
        ..Default::default()
    };

    eframe::run_native(
        "TrackRows",
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(app.theme().visuals());
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Viewer failed: {e}"))
}
