//! ChronoNote Frontend Entry Point

mod app;
mod browser;
mod components;
mod context;
mod store;

use app::App;
use console_logger::LoggerConfig;
use leptos::prelude::*;
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if let Err(e) = console_logger::init(LoggerConfig {
        level,
        ..LoggerConfig::default()
    }) {
        web_sys::console::warn_1(&format!("console logger not installed: {}", e).into());
    }

    mount_to_body(App);
}
