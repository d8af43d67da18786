//! # codemaster-client
//!
//! Leptos + WASM frontend for CodeMaster, an interactive programming course:
//! a code playground, an exercise browser, a tutorial walkthrough, and a
//! progress dashboard on one tabbed landing page.
//!
//! The crate builds twice. With `ssr` it is linked into the server for the
//! initial render; with `hydrate` it compiles to WASM and takes over the
//! server-rendered DOM. The playground evaluator in [`script`] is pure Rust
//! and runs the same way under both.

pub mod app;
pub mod components;
pub mod pages;
pub mod script;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
