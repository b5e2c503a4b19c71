//! Signup Desk
//!
//! Activity sign-up page built with Leptos (WASM).
//!
//! # Features
//!
//! - Activity list with remaining capacity and participant rosters
//! - Email sign-up for any activity
//! - Teacher login, logout and participant removal
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All behavior lives in the `signup-desk` controller; this
//! crate supplies the browser backend, storage and timers, and maps the
//! view model to DOM.

use leptos::*;

mod api;
mod app;
mod components;
mod logging;
mod state;

#[cfg(test)]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    let config = signup_desk::ClientConfig::default();
    logging::init(&config.logging.level);

    // Mount the app to the document body
    mount_to_body(move || view! { <app::App config /> });
}
