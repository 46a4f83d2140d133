//! Scripted LLM Provider
//!
//! For tests and offline demos. Replies are picked by substring match
//! against the last prompt message.

use std::sync::Mutex;

use async_trait::async_trait;
use chat_core::{
    error::{ChatError, Result},
    provider::{Completion, GenerationOptions, LlmProvider, PromptMessage},
};

/// Provider that answers from a fixed rule list
#[derive(Debug, Default)]
pub struct ScriptedProvider {
    rules: Vec<(String, String)>,
    otherwise: Option<String>,
    unavailable: bool,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reply with `reply` when the prompt contains `needle`
    #[must_use]
    pub fn on(mut self, needle: impl Into<String>, reply: impl Into<String>) -> Self {
        self.rules.push((needle.into(), reply.into()));
        self
    }

    /// Reply used when no rule matches
    #[must_use]
    pub fn otherwise(mut self, reply: impl Into<String>) -> Self {
        self.otherwise = Some(reply.into());
        self
    }

    /// A provider whose every call fails as if Ollama were down
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    /// Every prompt received so far, oldest first
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().map(|p| p.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl LlmProvider for ScriptedProvider {
    fn name(&self) -> &str {
        "Scripted"
    }

    async fn health_check(&self) -> Result<bool> {
        Ok(!self.unavailable)
    }

    async fn complete(
        &self,
        messages: &[PromptMessage],
        options: &GenerationOptions,
    ) -> Result<Completion> {
        if self.unavailable {
            return Err(ChatError::ProviderUnavailable("scripted outage".into()));
        }

        let prompt = messages.last().map(|m| m.content.clone()).unwrap_or_default();
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.clone());
        }

        let reply = self
            .rules
            .iter()
            .find(|(needle, _)| prompt.contains(needle.as_str()))
            .map(|(_, reply)| reply.clone())
            .or_else(|| self.otherwise.clone())
            .ok_or_else(|| ChatError::Provider(format!("no scripted reply for: {prompt}")))?;

        Ok(Completion {
            content: reply,
            model: options.model.clone(),
            tokens: None,
        })
    }

    async fn list_models(&self) -> Result<Vec<String>> {
        Ok(vec!["scripted".into()])
    }
}
