//! List Board Frontend Entry Point

mod actions;
mod api;
mod app;
mod board;
mod components;
mod config;
mod context;
mod logging;
mod models;
mod store;
mod sync;

use app::App;
use config::Config;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = Config::load();
    logging::init(config.log_level);
    log::info!(target: "board", "API at {}, {:?} moves", config.api_url, config.move_mode);

    mount_to_body(move || view! { <App config=config /> });
}
