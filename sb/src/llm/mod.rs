//! Generation client module for StudyBuddy
//!
//! Provides the generative backend trait, the conversation handle, and the
//! Gemini implementation.

use std::sync::Arc;

use tracing::debug;

pub mod client;
mod error;
mod gemini;

pub use client::{Conversation, GenerativeClient, Message, Role};
pub use error::LlmError;
pub use gemini::GeminiClient;

use crate::config::LlmConfig;

/// Create a generation client based on the provider specified in config
pub fn create_client(config: &LlmConfig) -> Result<Arc<dyn GenerativeClient>, LlmError> {
    debug!(provider = %config.provider, model = %config.model, "create_client: called");
    match config.provider.as_str() {
        "gemini" => Ok(Arc::new(GeminiClient::from_config(config)?)),
        other => Err(LlmError::InvalidResponse(format!(
            "Unknown generation provider: '{}'. Supported: gemini",
            other
        ))),
    }
}
