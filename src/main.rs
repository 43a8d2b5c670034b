//! Todo MVC Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod logger;
mod storage;
mod store;
mod view;

use app::App;
use leptos::prelude::*;
use todo_core::AppConfig;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match config::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    logger::init(config.level_filter());
    if let Some(e) = config_error {
        log::warn!("[Config] ignoring todo-config override: {}", e);
    }

    mount_to_body(move || view! { <App config=config /> });
}
