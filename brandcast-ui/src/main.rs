//! Brandcast Frontend
//!
//! LinkedIn AI Agent single-page app built with Leptos (WASM).
//!
//! # Pages
//!
//! - Dashboard: post counts and quick actions
//! - Profile: name, headline and about
//! - Generate: prompt in, preview out, save as draft
//! - Posts: every post, with scheduling for drafts
//! - Analytics: engagement totals and top posts
//! - Trends: industry trends and prompt suggestions
//!
//! # Architecture
//!
//! Client-side rendered (CSR) Leptos application compiled to WebAssembly.
//! Page logic lives in the `brandcast` crate's view models; this crate only
//! renders their state and forwards user input.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Route tracing output to the browser console
    tracing_wasm::set_as_global_default();

    tracing::info!(api_base = %api::get_api_base(), "Starting Brandcast");

    mount_to_body(|| view! { <app::App /> });
}
