//! Support Workflow
//!
//! classify → route → (RAG answer | escalation reply)

use std::sync::Arc;

use chat_core::provider::LlmProvider;
use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::classifier::Classifier;
use crate::error::Result;
use crate::escalation::escalate;
use crate::knowledge::KnowledgeBase;
use crate::responder::RagResponder;

/// Workflow settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorkflowConfig {
    /// Model used for both classification and answers
    pub model: String,

    /// Chunks retrieved per product question
    pub top_k: usize,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            model: "llama3.2".into(),
            top_k: 3,
        }
    }
}

/// Which node handles a category
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    RagResponder,
    Escalation,
}

impl Route {
    pub const fn for_category(category: Category) -> Self {
        match category {
            Category::Products => Self::RagResponder,
            Category::Returns | Category::General => Self::Escalation,
        }
    }
}

/// Final workflow state
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Answer {
    pub question: String,
    pub category: Category,
    pub answer: String,
}

pub struct SupportWorkflow {
    classifier: Classifier,
    responder: RagResponder,
}

impl SupportWorkflow {
    pub fn new(
        provider: Arc<dyn LlmProvider>,
        knowledge: Arc<KnowledgeBase>,
        config: &WorkflowConfig,
    ) -> Self {
        Self {
            classifier: Classifier::new(provider.clone(), config.model.clone()),
            responder: RagResponder::new(provider, knowledge, config.model.clone(), config.top_k),
        }
    }

    pub async fn answer(&self, question: &str) -> Result<Answer> {
        let category = self.classifier.classify(question).await?;

        let route = Route::for_category(category);
        tracing::debug!(?route, "routing query");

        let answer = match route {
            Route::RagResponder => self.responder.answer(question).await?,
            Route::Escalation => escalate(category).to_owned(),
        };

        Ok(Answer {
            question: question.to_owned(),
            category,
            answer,
        })
    }
}
