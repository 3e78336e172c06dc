#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use anyhow::{anyhow, Context, Result};
use audio_switch_rs::app::DASHBOARD_TITLE;
use audio_switch_rs::platform::app_icon;
use audio_switch_rs::{logging, AudioSwitchApp, UiConfig};
use eframe::egui;
use tracing::{error, info};

const APP_ID: &str = "AudioSwitch";
const OVERLAY_SIZE: [f32; 2] = [48.0, 48.0];

fn main() -> Result<()> {
    let config = UiConfig::load().context("Failed to load configuration")?;
    logging::init(&config.logging)?;
    info!(
        "Audio Switch starting, host service at {}",
        config.host.address
    );

    let options = eframe::NativeOptions {
        viewport: root_viewport(&config),
        ..Default::default()
    };

    let result = eframe::run_native(
        APP_ID,
        options,
        Box::new(move |cc| match AudioSwitchApp::connect(cc, config) {
            Ok(app) => Ok(Box::new(app) as Box<dyn eframe::App>),
            Err(e) => {
                error!("{}", e);
                Err(e.into())
            }
        }),
    );

    result.map_err(|e| anyhow!("Audio Switch failed: {}", e))
}

/// The overlay is the root window; without it the dashboard takes its place.
fn root_viewport(config: &UiConfig) -> egui::ViewportBuilder {
    let builder = egui::ViewportBuilder::default()
        .with_app_id(APP_ID)
        .with_icon(app_icon(false))
        .with_transparent(true);

    if config.overlay.enabled {
        builder
            .with_title("Audio Switch Overlay")
            .with_inner_size(OVERLAY_SIZE)
            .with_decorations(false)
            .with_resizable(false)
            .with_always_on_top()
            .with_taskbar(false)
    } else {
        builder
            .with_title(DASHBOARD_TITLE)
            .with_inner_size([config.dashboard.width, config.dashboard.height])
    }
}
