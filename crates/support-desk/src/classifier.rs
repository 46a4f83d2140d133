//! Query Classifier

use std::sync::Arc;

use chat_core::provider::{GenerationOptions, LlmProvider, PromptMessage};

use crate::category::Category;
use crate::error::Result;

/// Labels are a single word
const LABEL_TOKENS: u32 = 16;

fn classify_prompt(question: &str) -> String {
    format!(
        "Classify the following user query into exactly one of these categories: \
         'products', 'returns', or 'general'.\nQuery: {question}\nCategory:"
    )
}

/// Asks the model for a category label and normalizes the reply
pub struct Classifier {
    provider: Arc<dyn LlmProvider>,
    options: GenerationOptions,
}

impl Classifier {
    pub fn new(provider: Arc<dyn LlmProvider>, model: impl Into<String>) -> Self {
        Self {
            provider,
            options: GenerationOptions::deterministic(model).with_max_tokens(LABEL_TOKENS),
        }
    }

    pub async fn classify(&self, question: &str) -> Result<Category> {
        let prompt = classify_prompt(question);
        let completion = self
            .provider
            .complete(&[PromptMessage::user(prompt)], &self.options)
            .await?;

        let category = Category::from_label(&completion.content);
        tracing::info!(%category, raw = completion.content.trim(), "query classified");
        Ok(category)
    }
}
