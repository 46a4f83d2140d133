//! # support-desk
//!
//! Answer workflow behind `POST /query`.
//!
//! ```text
//! question ──► Classifier ──products──► RagResponder ──► answer
//!                  │                        ▲
//!                  │                  KnowledgeBase
//!                  └──returns/general──► escalation ──► answer
//! ```
//!
//! Every answer carries the category it was routed by, which the widget
//! shows as a tag.

pub mod category;
pub mod classifier;
pub mod error;
pub mod escalation;
pub mod knowledge;
pub mod mock;
pub mod responder;
pub mod workflow;

pub use category::Category;
pub use classifier::Classifier;
pub use error::{DeskError, Result};
pub use knowledge::{KnowledgeBase, TextSplitter};
pub use responder::RagResponder;
pub use workflow::{Answer, SupportWorkflow, WorkflowConfig};
