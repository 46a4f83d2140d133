//! Error Types for the Support Desk

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DeskError>;

#[derive(Error, Debug)]
pub enum DeskError {
    #[error("LLM error: {0}")]
    Provider(#[from] chat_core::ChatError),

    #[error("Knowledge base error: {0}")]
    Knowledge(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl DeskError {
    /// Error code for HTTP error bodies
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Provider(_) => "LLM_ERROR",
            Self::Knowledge(_) => "KNOWLEDGE_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
        }
    }
}
