//! # client
//!
//! Leptos + WASM frontend for the OceanView ARGO float dashboard.
//!
//! This crate contains the view shell, the five dashboard panels, their
//! pure state reducers, the fetch and training hooks, and the static float,
//! region, and lesson tables. Wire types come from the `records` crate.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod data;
pub mod hooks;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

pub use app::App;

/// Hydration entry point for the WASM bundle.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // Fails only if a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(App);
}
