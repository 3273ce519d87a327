//! # recipeboard
//!
//! Leptos + WASM single-page client for the recipe list service.
//!
//! The crate authenticates against a hosted identity provider by reading the
//! identity token the provider's SDK leaves in browser credential storage,
//! decodes the token's claims locally, and drives create/read/update/delete
//! calls against the remote recipes API with per-request correlation ids.
//!
//! Modules: `pages` and `components` render the UI, `state` holds shared
//! signal payloads, `auth` covers session/token/claims, `net` covers the wire
//! schema and HTTP layer, and `sync` orchestrates the two into list updates.

pub mod app;
pub mod auth;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod sync;

/// WASM entry point: install panic/log hooks and hydrate the app shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
