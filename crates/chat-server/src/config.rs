//! Server Configuration
//!
//! Read from the process environment (after `.env` is loaded).

use std::path::PathBuf;

use support_desk::{
    knowledge::{DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE},
    TextSplitter, WorkflowConfig,
};

#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// `BIND_ADDR`
    pub bind_addr: String,

    /// `STATIC_DIR`: holds `index.html`, styles and the widget package
    pub static_dir: PathBuf,

    /// `KNOWLEDGE_PATH`: plain text product document
    pub knowledge_path: PathBuf,

    /// `CHAT_MODEL`
    pub model: String,

    /// `RETRIEVAL_K`
    pub top_k: usize,

    /// `CHUNK_SIZE`
    pub chunk_size: usize,

    /// `CHUNK_OVERLAP`
    pub chunk_overlap: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8000".into(),
            static_dir: PathBuf::from("static"),
            knowledge_path: PathBuf::from("product_details.txt"),
            model: "llama3.2".into(),
            top_k: 3,
            chunk_size: DEFAULT_CHUNK_SIZE,
            chunk_overlap: DEFAULT_CHUNK_OVERLAP,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or unparseable values keep defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let parsed = |key: &str, default: usize| {
            lookup(key)
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(default)
        };

        Self {
            bind_addr: lookup("BIND_ADDR").unwrap_or(defaults.bind_addr),
            static_dir: lookup("STATIC_DIR").map_or(defaults.static_dir, PathBuf::from),
            knowledge_path: lookup("KNOWLEDGE_PATH").map_or(defaults.knowledge_path, PathBuf::from),
            model: lookup("CHAT_MODEL").unwrap_or(defaults.model),
            top_k: parsed("RETRIEVAL_K", defaults.top_k),
            chunk_size: parsed("CHUNK_SIZE", defaults.chunk_size),
            chunk_overlap: parsed("CHUNK_OVERLAP", defaults.chunk_overlap),
        }
    }

    pub fn workflow(&self) -> WorkflowConfig {
        WorkflowConfig {
            model: self.model.clone(),
            top_k: self.top_k,
        }
    }

    pub fn splitter(&self) -> support_desk::Result<TextSplitter> {
        TextSplitter::new(self.chunk_size, self.chunk_overlap)
    }
}
