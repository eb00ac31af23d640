//! Film Register API: wiring of the auth and catalog domains into one axum app.
//!
//! The binary in `main.rs` connects to PostgreSQL; [`api::compose`] is generic
//! over the stores so tests can run the same router over the in-memory ones.

pub mod api;
pub mod config;
pub mod openapi;
pub mod seed;
pub mod state;
