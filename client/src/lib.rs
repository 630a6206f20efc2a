//! # client
//!
//! Leptos + WASM front-end for the arena site.
//!
//! This crate contains the root application shell, the reusable modal
//! overlay, the static legal documents shown inside it, and the build-time
//! configuration substituted into the bundle. The `server` crate renders it
//! through SSR; the `hydrate` feature builds the browser side.

pub mod app;
pub mod components;
pub mod config;
pub mod state;

/// WASM entry point: attach the client to the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // A second init (hot reload) fails harmlessly; keep the first logger.
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
