//! # client
//!
//! Leptos + WASM frontend for the hospital portal.
//!
//! This crate mounts the application, configures the shared HTTP client and
//! its 401 interceptor, declares the route table, and guards navigation by
//! the role stored in the browser's session record.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entry point: mount the app onto the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("hospital portal hydrating");
    leptos::mount::hydrate_body(app::App);
}
