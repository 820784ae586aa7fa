//! Lost & Found Frontend Entry Point

mod actions;
mod api;
mod app;
mod components;
mod config;
mod context;
mod debounce;
mod error;
mod listing;
mod loaders;
mod models;
mod pages;
mod routes;
mod session;
mod store;
mod views;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    // `off` disables logging entirely
    if let Some(level) = config::config().log_level.to_level() {
        wasm_logger::init(wasm_logger::Config::new(level));
    }
    log::info!("api base: {:?}", config::config().api_base);
    mount_to_body(App);
}
