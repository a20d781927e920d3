// lib.rs - Root module for the movie_finder library
//
// The library is shared by the server binary (ssr) and the WASM bundle
// (hydrate). Everything that talks to the network or the database lives
// behind the `ssr` feature inside `web_app::api`.

/// Reusable SQL table fixtures for database tests and tools
#[cfg(feature = "ssr")]
pub mod fixtures;

pub mod web_app;

/// WASM entry point: hydrates the server-rendered page
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(web_app::App);
}
