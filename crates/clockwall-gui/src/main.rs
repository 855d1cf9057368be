mod app;
mod clockface;
mod cmd;
mod timepicker;
mod wall_view;
mod zone_picker;

use std::process;

use clap::Parser;
use clockwall_lib::main_window::MainWindowState;
use eframe::egui;

use crate::app::{ClockWallApp, TITLE};

fn main() -> eframe::Result {
    // Redirect log messages to the console
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = cmd::Args::parse();
    let config = match args.config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{e}");
            process::exit(1);
        }
    };
    let state = match MainWindowState::new(&config) {
        Ok(state) => state,
        Err(e) => {
            log::error!("{e}");
            process::exit(1);
        }
    };
    log::info!(
        "Starting with {} time zones, main zone {}",
        state.zones.len(),
        state.main_zone().name()
    );

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([config.window.width, config.window.height])
        .with_min_inner_size([500.0, 400.0])
        .with_title(TITLE);

    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native(
        TITLE,
        native_options,
        Box::new(|_cc| Ok(Box::new(ClockWallApp::new(state)))),
    )
}
