//! The slang delegate seam.
//!
//! A delegate takes user text and returns a slang rewrite produced by a
//! remote model. The HTTP layer only sees this trait, so tests can swap in a
//! stub without any network.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::utilities::errors::DelegateError;

/// Instruction sent as the system message of every delegate request.
pub const SYSTEM_PROMPT: &str = "Transform the user's text into playful Gen Alpha slang. \
     Keep meaning intact, be short, and avoid hateful or sexual content.";

/// A single chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Remote text-in/text-out slang rewriter.
#[async_trait]
pub trait SlangDelegate: Send + Sync {
    /// Rewrite `text`, returning the model's reply with surrounding
    /// whitespace removed.
    async fn rewrite(&self, text: &str) -> Result<String, DelegateError>;

    /// Short name for logs.
    fn provider(&self) -> &str;
}
