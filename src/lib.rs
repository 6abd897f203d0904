#![allow(non_snake_case)]

pub mod bindings;
pub mod components;
pub mod config;
pub mod data_url;
pub mod error;
pub mod preview;
pub mod services;
pub mod widget;

mod app;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();
    init_logging();

    log::info!("Starting file picker preview");

    // Remove loading placeholder
    if let Some(loader) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("app-loading"))
    {
        loader.remove();
    }

    leptos::mount::mount_to_body(app::App);
}

/// Send `log` records through `tracing` to the browser console.
fn init_logging() {
    tracing_wasm::set_as_global_default();
    if let Err(e) = tracing_log::LogTracer::init() {
        web_sys::console::warn_1(&format!("Log bridge not installed: {e}").into());
    }
}
