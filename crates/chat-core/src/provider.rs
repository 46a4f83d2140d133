//! Language Model Seam
//!
//! The answer server never talks to a model backend directly: it holds an
//! `Arc<dyn LlmProvider>` and sends single-turn prompts through it. Ollama
//! lives in `chat-runtime`; tests use a scripted provider.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Prompts are single-turn, so only user turns are ever sent
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptRole {
    User,
}

/// One turn of a prompt, serialized as `{"role": .., "content": ..}`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptMessage {
    pub role: PromptRole,
    pub content: String,
}

impl PromptMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: PromptRole::User,
            content: content.into(),
        }
    }
}

/// Sampling settings for one call
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationOptions {
    pub model: String,
    pub temperature: f32,
    /// Cap on generated tokens; `None` leaves it to the backend
    pub max_tokens: Option<u32>,
}

impl GenerationOptions {
    /// Temperature 0. Classification and grounded answers must not wander.
    pub fn deterministic(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            temperature: 0.0,
            max_tokens: None,
        }
    }

    #[must_use]
    pub const fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

/// Text produced by a provider
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Completion {
    pub content: String,
    /// Model that actually answered, as reported by the backend
    pub model: String,
    /// Prompt plus generated tokens, when the backend reports them
    pub tokens: Option<u32>,
}

#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Short display name (`/health`, startup log)
    fn name(&self) -> &str;

    /// `Ok(false)` when the backend is down; `Err` only for unexpected failures
    async fn health_check(&self) -> Result<bool>;

    async fn complete(
        &self,
        messages: &[PromptMessage],
        options: &GenerationOptions,
    ) -> Result<Completion>;

    /// Names of the models the backend can serve
    async fn list_models(&self) -> Result<Vec<String>>;
}
