//! Application State

use std::sync::Arc;

use chat_core::LlmProvider;
use support_desk::{KnowledgeBase, SupportWorkflow};

use crate::config::ServerConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// LLM provider (Ollama, etc.)
    pub provider: Arc<dyn LlmProvider>,

    /// Indexed product document
    pub knowledge: Arc<KnowledgeBase>,

    /// classify → route → answer
    pub workflow: Arc<SupportWorkflow>,
}

impl AppState {
    pub fn new(
        provider: Arc<dyn LlmProvider>,
        knowledge: KnowledgeBase,
        config: &ServerConfig,
    ) -> Self {
        let knowledge = Arc::new(knowledge);
        let workflow = SupportWorkflow::new(provider.clone(), knowledge.clone(), &config.workflow());

        Self {
            provider,
            knowledge,
            workflow: Arc::new(workflow),
        }
    }

    /// Load the knowledge file named by the config. A missing or unreadable
    /// file leaves the knowledge base empty; product questions then get the
    /// "no information" answer.
    pub async fn load(provider: Arc<dyn LlmProvider>, config: &ServerConfig) -> anyhow::Result<Self> {
        let splitter = config.splitter()?;

        let knowledge = match KnowledgeBase::load(&config.knowledge_path, &splitter).await {
            Ok(kb) => kb,
            Err(e) => {
                tracing::warn!("⚠ {} - starting with an empty knowledge base", e);
                KnowledgeBase::empty()
            }
        };

        Ok(Self::new(provider, knowledge, config))
    }
}
