//! Native booking page.
//!
//! Usage: `week_booking [CONFIG.ron]`. Without an argument the config path is read
//! from `WEEK_BOOKING_CONFIG`, and without either the built-in config is used.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use week_booking::BookingConfig;
use week_booking_app::BookingApp;

const CONFIG_ENV_VAR: &str = "WEEK_BOOKING_CONFIG";

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config = load_config();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 768.0])
            .with_min_inner_size([480.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Week booking",
        options,
        Box::new(|_cc| Ok(Box::new(BookingApp::new(config)))),
    )
}

fn load_config() -> BookingConfig {
    let path = std::env::args_os()
        .nth(1)
        .or_else(|| std::env::var_os(CONFIG_ENV_VAR));

    let Some(path) = path else {
        log::debug!("No config given, using the built-in one");
        return BookingConfig::default();
    };

    match BookingConfig::load(&path) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("Using the built-in config: {err}");
            BookingConfig::default()
        }
    }
}
