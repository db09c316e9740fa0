//! # slangify
//!
//! Rewrites text into playful slang. Two paths:
//!
//! - [`slang`] — a local, table-driven transformer: whole-word swaps that keep
//!   each word's casing, plus optional random embellishments.
//! - [`llms`] — a remote delegate that asks a chat-completion model for the
//!   rewrite.
//!
//! [`server`] exposes both over HTTP.

pub mod llms;
pub mod server;
pub mod slang;
pub mod utilities;

pub use llms::{ChatCompletionDelegate, SlangDelegate};
pub use slang::{transform, SlangTransformer};
pub use utilities::config::{DelegateConfig, ServerConfig};
pub use utilities::errors::DelegateError;

/// Crate version, reported by `/health`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
