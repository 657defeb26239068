//! SA Economic Tracker
//!
//! Single-page dashboard for precomputed South African economic indicators,
//! built with Leptos (WASM).
//!
//! # Features
//!
//! - Indicator summary cards straight from the backend aggregate payload
//! - Historical trend mini-charts for four fixed series
//! - Free-text question panel backed by a remote answering service
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It talks to the tracker API over HTTP: one `GET /dashboard`
//! on load and one `POST /ask` per submitted question.

use leptos::*;

mod api;
mod app;
mod components;
mod model;
mod pages;
mod state;
mod theme;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
