//! GenerativeClient trait and conversation handle

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

use super::LlmError;

/// Message author
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

/// A single message in a conversation history
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub role: Role,
    pub text: String,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            text: text.into(),
        }
    }
}

/// Stateless generation client - each call carries its full input
///
/// `generate` is a one-shot prompt-in/text-out completion; `chat` replays
/// the supplied history. The backend holds no state between calls, so
/// conversation continuity lives entirely in the [`Conversation`] handle.
#[async_trait]
pub trait GenerativeClient: Send + Sync {
    /// One-shot completion for roadmap generation
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;

    /// Conversational completion over an explicit history
    async fn chat(&self, history: &[Message]) -> Result<String, LlmError>;
}

/// Conversation handle holding the exchange history
///
/// Each `send` appends the user message, replays the whole history to the
/// backend, and records the reply. A failed turn leaves the history
/// unchanged.
pub struct Conversation {
    client: Arc<dyn GenerativeClient>,
    history: Vec<Message>,
}

impl Conversation {
    pub fn new(client: Arc<dyn GenerativeClient>) -> Self {
        Self {
            client,
            history: Vec::new(),
        }
    }

    /// Send one message and return the backend's reply
    pub async fn send(&mut self, prompt: &str) -> Result<String, LlmError> {
        debug!(history_len = self.history.len(), "Conversation::send: called");
        self.history.push(Message::user(prompt));
        match self.client.chat(&self.history).await {
            Ok(reply) => {
                self.history.push(Message::model(&reply));
                Ok(reply)
            }
            Err(e) => {
                self.history.pop();
                Err(e)
            }
        }
    }

    /// Number of messages exchanged so far
    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}
