//! # ecostore
//!
//! Leptos + WASM storefront for an eco-product marketplace.
//!
//! This crate contains the page stack, the product ingestion pipeline
//! (remote fetch with bundled CSV fallback, tolerant normalization,
//! filtering and pagination), eco-label prediction, and the chat assistant
//! panel. The HTTP backends are external collaborators reached through `net`.
//! With the `ssr` feature, `server` renders the app for hydration.

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod products;
#[cfg(feature = "ssr")]
pub mod server;
pub mod state;
pub mod util;

/// Console text reported when the browser logger cannot be installed.
pub fn logger_init_failure(err: &dyn std::fmt::Display) -> String {
    format!("ecostore: console logger unavailable, log output disabled: {err}")
}

/// Browser entry point: install logging and hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::error_1(&logger_init_failure(&err).into());
    }
    leptos::mount::hydrate_body(app::App);
}
