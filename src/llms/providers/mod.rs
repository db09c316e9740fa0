//! Delegate provider implementations.
//!
//! | Provider | Module |
//! |----------|--------|
//! | OpenAI-compatible Chat Completions | [`openai`] |

pub mod openai;
