//! Remote slang delegates.
//!
//! - [`base_llm`] - The [`SlangDelegate`] trait and chat message type
//! - [`providers`] - Concrete delegate implementations

pub mod base_llm;
pub mod providers;

pub use base_llm::{ChatMessage, SlangDelegate, SYSTEM_PROMPT};
pub use providers::openai::ChatCompletionDelegate;
