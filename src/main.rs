//! WasteNet Dashboard
//!
//! Operations dashboard for the MarsWasteNet recycling facility, built with
//! Leptos (WASM).
//!
//! # Features
//!
//! - Facility throughput and recovery visualizations
//! - Simulated login/signup persisted in the browser
//! - Community idea board with a shared like counter
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. There is no server: all state lives in the browser, and
//! persistence is localStorage.

use leptos::*;

mod app;
mod components;
mod pages;
mod state;
mod storage;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
