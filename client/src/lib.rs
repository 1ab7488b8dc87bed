//! # client
//!
//! Leptos + WASM frontend for the MyStore storefront.
//!
//! This crate contains the route table, the layout shell, page views, and
//! the REST helpers used to talk to the server. It is compiled twice: with
//! `ssr` for server-side rendering inside the Axum binary, and with
//! `hydrate` for the browser WASM bundle.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
