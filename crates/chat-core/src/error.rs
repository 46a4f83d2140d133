//! Error Types

use thiserror::Error;

/// Result type alias for chat operations
pub type Result<T> = std::result::Result<T, ChatError>;

/// The only text a user ever sees when a query fails.
pub const FALLBACK_MESSAGE: &str = "Sorry, I encountered an error. Please try again later.";

/// Chat error types
#[derive(Error, Debug)]
pub enum ChatError {
    /// Request never reached the server or the connection dropped
    #[error("Transport error: {0}")]
    Transport(String),

    /// Server answered with a non-success status
    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body was not the expected JSON
    #[error("Malformed response: {0}")]
    Decode(String),

    /// LLM provider error
    #[error("Provider error: {0}")]
    Provider(String),

    /// Provider unavailable or not responding
    #[error("Provider unavailable: {0}")]
    ProviderUnavailable(String),
}

impl ChatError {
    /// Short machine-readable tag, used in diagnostics and error bodies
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport",
            Self::Status { .. } => "status",
            Self::Decode(_) => "decode",
            Self::Provider(_) => "provider",
            Self::ProviderUnavailable(_) => "provider_unavailable",
        }
    }

    /// Whether this error came from the `/query` round trip itself
    pub const fn is_query_failure(&self) -> bool {
        matches!(
            self,
            Self::Transport(_) | Self::Status { .. } | Self::Decode(_)
        )
    }
}
