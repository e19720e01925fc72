//! # citadel-client
//!
//! Leptos + WASM shell for the Citadel project board. On load it restores the
//! user's session with one silent refresh, decodes the returned access token,
//! publishes the signed-in identity through context, and redirects to login or
//! install when needed.
//!
//! Access-token claims are decoded without signature verification. Their
//! integrity rests entirely on the session-cookie-authenticated refresh call
//! that delivered them; the server re-checks the token on every request.

pub mod app;
pub mod auth;
pub mod config;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

/// Browser entry point: install logging and hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
