//! Configuration and error types shared across the crate.

pub mod config;
pub mod errors;
