//! # prestalink
//!
//! Leptos + WASM front-end for the Prestalink services marketplace.
//! Renders the landing pages, the social feed, the provider onboarding
//! flow, and the role-specific dashboards against the remote REST API.
//!
//! This crate contains pages, components, application state, the REST
//! client, and the browser-storage session glue. Interaction logic is
//! kept in plain structs under `state/` so it stays testable without a
//! browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point for client-side hydration.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
