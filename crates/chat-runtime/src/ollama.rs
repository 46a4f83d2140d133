//! Ollama Provider
//!
//! `LlmProvider` over Ollama's REST API: `POST /api/chat` (non-streaming)
//! for completions and `GET /api/tags` for the installed models.

use std::time::Duration;

use async_trait::async_trait;
use chat_core::{
    error::{ChatError, Result},
    provider::{Completion, GenerationOptions, LlmProvider, PromptMessage},
};
use serde::{Deserialize, Serialize};

const DEFAULT_HOST: &str = "http://localhost";
const DEFAULT_PORT: u16 = 11434;

/// Where Ollama listens and how long a completion may take
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OllamaConfig {
    /// Scheme and host, e.g. `http://localhost`
    pub host: String,
    pub port: u16,
    pub timeout: Duration,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT,
            timeout: Duration::from_secs(120),
        }
    }
}

impl OllamaConfig {
    /// `OLLAMA_HOST`, `OLLAMA_PORT`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(host) = lookup("OLLAMA_HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("OLLAMA_PORT").and_then(|p| p.trim().parse().ok()) {
            config.port = port;
        }
        config
    }

    pub fn base_url(&self) -> String {
        format!("{}:{}", self.host.trim_end_matches('/'), self.port)
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [PromptMessage],
    stream: bool,
    options: SamplingOptions,
}

#[derive(Serialize)]
struct SamplingOptions {
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    num_predict: Option<u32>,
}

#[derive(Deserialize)]
struct ChatReply {
    model: String,
    message: ReplyMessage,
    #[serde(default)]
    prompt_eval_count: Option<u32>,
    #[serde(default)]
    eval_count: Option<u32>,
}

#[derive(Deserialize)]
struct ReplyMessage {
    content: String,
}

impl From<ChatReply> for Completion {
    fn from(reply: ChatReply) -> Self {
        let tokens = match (reply.prompt_eval_count, reply.eval_count) {
            (None, None) => None,
            (prompt, eval) => Some(prompt.unwrap_or(0) + eval.unwrap_or(0)),
        };
        Self {
            content: reply.message.content,
            model: reply.model,
            tokens,
        }
    }
}

#[derive(Deserialize)]
struct Tags {
    models: Vec<Tag>,
}

#[derive(Deserialize)]
struct Tag {
    name: String,
}

pub struct OllamaProvider {
    client: reqwest::Client,
    config: OllamaConfig,
}

impl OllamaProvider {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self::from_config(OllamaConfig {
            host: host.into(),
            port,
            ..Default::default()
        })
    }

    pub fn from_config(config: OllamaConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Falling back to default HTTP client: {}", e);
                reqwest::Client::new()
            });

        Self { client, config }
    }

    pub fn from_env() -> Self {
        Self::from_config(OllamaConfig::from_env())
    }

    pub const fn config(&self) -> &OllamaConfig {
        &self.config
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url())
    }

    fn chat_request<'a>(
        messages: &'a [PromptMessage],
        options: &'a GenerationOptions,
    ) -> ChatRequest<'a> {
        ChatRequest {
            model: &options.model,
            messages,
            stream: false,
            options: SamplingOptions {
                temperature: options.temperature,
                num_predict: options.max_tokens,
            },
        }
    }
}

/// A refused or timed-out connection means Ollama is down, not broken
fn send_error(e: &reqwest::Error) -> ChatError {
    if e.is_connect() || e.is_timeout() {
        ChatError::ProviderUnavailable(e.to_string())
    } else {
        ChatError::Provider(e.to_string())
    }
}

#[async_trait]
impl LlmProvider for OllamaProvider {
    fn name(&self) -> &str {
        "Ollama"
    }

    async fn health_check(&self) -> Result<bool> {
        match self.list_models().await {
            Ok(_) => Ok(true),
            Err(e) => {
                tracing::warn!("Ollama health check failed: {}", e);
                Ok(false)
            }
        }
    }

    async fn complete(
        &self,
        messages: &[PromptMessage],
        options: &GenerationOptions,
    ) -> Result<Completion> {
        let response = self
            .client
            .post(self.endpoint("/api/chat"))
            .json(&Self::chat_request(messages, options))
            .send()
            .await
            .map_err(|e| send_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ChatError::Provider(format!("Ollama returned {status}: {body}")));
        }

        let reply: ChatReply = response
            .json()
            .await
            .map_err(|e| ChatError::Provider(format!("bad chat reply: {e}")))?;

        let completion = Completion::from(reply);
        tracing::debug!(model = %completion.model, tokens = ?completion.tokens, "completion done");
        Ok(completion)
    }

    async fn list_models(&self) -> Result<Vec<String>> {
        let response = self
            .client
            .get(self.endpoint("/api/tags"))
            .send()
            .await
            .map_err(|e| ChatError::ProviderUnavailable(e.to_string()))?
            .error_for_status()
            .map_err(|e| ChatError::ProviderUnavailable(e.to_string()))?;

        let tags: Tags = response
            .json()
            .await
            .map_err(|e| ChatError::Provider(format!("bad tags reply: {e}")))?;

        Ok(tags.models.into_iter().map(|m| m.name).collect())
    }
}
