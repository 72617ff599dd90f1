mod controller;
mod ui;

use anyhow::{anyhow, Context};
use eframe::egui;
use sample_data::content;
use tracing_subscriber::EnvFilter;

use ui::{DashboardApp, PersistedDashboardSettings, SETTINGS_STORAGE_KEY};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = dashboard_core::load_settings().context("failed to load dashboard settings")?;
    tracing::info!(
        tab = %settings.initial_tab,
        distribution = %settings.data_distribution,
        mode = %settings.consensus_mode,
        "starting dashboard"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(content::TITLE)
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([900.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        content::TITLE,
        options,
        Box::new(move |cc| {
            let persisted = cc.storage.and_then(|storage| {
                storage
                    .get_string(SETTINGS_STORAGE_KEY)
                    .and_then(|text| PersistedDashboardSettings::from_storage_text(&text))
            });
            Ok(Box::new(DashboardApp::new(&settings, persisted)))
        }),
    )
    .map_err(|err| anyhow!("dashboard window failed: {err}"))
}
