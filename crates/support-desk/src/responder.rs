//! Retrieval-Augmented Responder
//!
//! Answers product questions strictly from knowledge base context.

use std::sync::Arc;

use chat_core::provider::{GenerationOptions, LlmProvider, PromptMessage};

use crate::error::Result;
use crate::knowledge::KnowledgeBase;

pub const NO_INFORMATION: &str = "I don't have that information in my knowledge base.";

/// Context and question are inserted verbatim, in one pass. Braces inside
/// the knowledge text or the question are never read as placeholders.
fn rag_prompt(context: &str, question: &str) -> String {
    format!(
        "Answer the question based only on the following context. \n\
         If the answer is not in the context, say \"{NO_INFORMATION}\"\n\n\
         Context:\n{context}\n\n\
         Question: {question}\n\n\
         Answer:"
    )
}

pub struct RagResponder {
    provider: Arc<dyn LlmProvider>,
    knowledge: Arc<KnowledgeBase>,
    options: GenerationOptions,
    top_k: usize,
}

impl RagResponder {
    pub fn new(
        provider: Arc<dyn LlmProvider>,
        knowledge: Arc<KnowledgeBase>,
        model: impl Into<String>,
        top_k: usize,
    ) -> Self {
        Self {
            provider,
            knowledge,
            options: GenerationOptions::deterministic(model),
            top_k,
        }
    }

    fn prompt(&self, question: &str) -> String {
        rag_prompt(&self.knowledge.context(question, self.top_k), question)
    }

    pub async fn answer(&self, question: &str) -> Result<String> {
        let prompt = self.prompt(question);
        let completion = self
            .provider
            .complete(&[PromptMessage::user(prompt)], &self.options)
            .await?;
        Ok(completion.content.trim().to_owned())
    }
}
