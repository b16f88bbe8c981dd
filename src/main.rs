//! ReadNest Shell
//!
//! Client-side routing shell for ReadNest, a personal reading tracker,
//! built with Leptos (WASM).
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It declares the route table and mounts the four page views;
//! everything else (navigation, rendering, matching paths to views) is
//! delegated to `leptos_router`.

use leptos::*;

mod app;
mod components;
mod pages;
mod routes;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
