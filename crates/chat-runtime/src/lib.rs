//! # chat-runtime
//!
//! Runtime providers for the kb-chat answer server.
//!
//! ## Providers
//!
//! - **Ollama**: local LLM inference over Ollama's REST API
//!
//! ## Usage
//!
//! ```rust,ignore
//! use chat_runtime::OllamaProvider;
//!
//! let provider: Arc<dyn LlmProvider> = Arc::new(OllamaProvider::from_env());
//! ```

pub mod ollama;

pub use ollama::{OllamaConfig, OllamaProvider};

// Re-export core types for convenience
pub use chat_core::{ChatError, LlmProvider, Result};
