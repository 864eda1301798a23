//! Waypoint - travel-social client application
//!
//! Screens for trip planning, a community board, chat, and the user profile,
//! backed by the Waypoint HTTP API.
//!
//! ## Running
//!
//! Web (browser, cookie-based sessions):
//! ```bash
//! dx serve --features web
//! ```
//!
//! Native (on-device credential storage):
//! ```bash
//! cargo run --features native
//! ```

#![allow(non_snake_case)]

mod app;
mod components;
mod config;
mod guard;
mod pages;
mod routes;
mod session;
mod storage;

fn main() {
    #[cfg(feature = "native")]
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt::init();

    dioxus::launch(app::App);
}
