//! Product Knowledge
//!
//! The product document is split into overlapping chunks at startup and kept
//! in memory; the RAG responder pulls the best-matching chunks per question.

mod splitter;
mod store;

pub use splitter::{TextSplitter, DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE};
pub use store::{Chunk, KnowledgeBase};
