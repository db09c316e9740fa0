//! HTTP server for the slang transformer.
//!
//! # Endpoints
//!
//! - `GET  /`             — Input form
//! - `POST /transform`    — Local word-swap transform
//! - `POST /ai-transform` — Transform through the remote slang delegate
//! - `GET  /health`       — Liveness probe

pub mod extract;
pub mod routes;
pub mod templates;

pub use routes::{app_router, AppState};
