use wasm_bindgen::prelude::*;

rust_i18n::i18n!("locales", fallback = "tr");

pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"Logger already initialised".into());
    }
    log::info!("Starting Yoklama frontend (wasm)");

    // Runtime config (window.__YOKLAMA_ENV or ./config.json) decides the locale,
    // so mounting waits for it.
    wasm_bindgen_futures::spawn_local(async move {
        config::init().await;
        rust_i18n::set_locale(&config::current_locale());
        log::info!("Runtime config initialized");
        router::mount_app();
    });
}
