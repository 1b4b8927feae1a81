//! # mostrador
//!
//! Leptos + WASM front end for a multi-role retail chain demo: a SaaS
//! control console, an owner dashboard, a point-of-sale register, and a
//! handheld scanner companion, all behind a credential-free role gate.
//!
//! Every dataset is mock data seeded in memory. There is no backend, no
//! network calls, and nothing survives a reload; "save" actions mutate
//! signals so the screens behave like the real thing.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(App);
}
