//! In-memory Knowledge Base
//!
//! Chunks of the product document plus a small lexical index. A chunk's
//! relevance to a query is the sum, over distinct query terms, of the term's
//! frequency in the chunk weighted by `ln(1 + N / df)`.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::Serialize;

use super::splitter::TextSplitter;
use crate::error::{DeskError, Result};

const STOPWORDS: &[&str] = &[
    "a", "an", "and", "are", "can", "do", "does", "for", "how", "i", "in", "is", "it", "me",
    "my", "of", "on", "or", "the", "to", "what", "when", "where", "which", "with", "you",
];

/// A retrievable passage of the source document
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Chunk {
    /// Position in the source document
    pub id: usize,
    pub text: String,
}

#[derive(Debug, Default)]
pub struct KnowledgeBase {
    chunks: Vec<Chunk>,
    term_counts: Vec<HashMap<String, u32>>,
    doc_freq: HashMap<String, usize>,
}

impl KnowledgeBase {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Split `text` and index every chunk
    pub fn from_text(text: &str, splitter: &TextSplitter) -> Self {
        let mut kb = Self::default();
        for (id, text) in splitter.split(text).into_iter().enumerate() {
            let counts = term_counts(&text);
            for term in counts.keys() {
                *kb.doc_freq.entry(term.clone()).or_insert(0) += 1;
            }
            kb.term_counts.push(counts);
            kb.chunks.push(Chunk { id, text });
        }
        kb
    }

    /// Read and index a plain text file
    pub async fn load(path: impl AsRef<Path>, splitter: &TextSplitter) -> Result<Self> {
        let path = path.as_ref();
        let text = tokio::fs::read_to_string(path).await.map_err(|e| {
            DeskError::Knowledge(format!("cannot read {}: {e}", path.display()))
        })?;

        let kb = Self::from_text(&text, splitter);
        tracing::info!("Indexed {} chunks from {}", kb.len(), path.display());
        Ok(kb)
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    /// Up to `k` chunks with a positive score, best first. Equal scores keep
    /// document order.
    pub fn retrieve(&self, query: &str, k: usize) -> Vec<&Chunk> {
        let terms: HashSet<String> = tokenize(query).collect();
        if terms.is_empty() || k == 0 {
            return Vec::new();
        }

        #[allow(clippy::cast_precision_loss)]
        let n = self.chunks.len() as f64;

        let mut scored: Vec<(f64, usize)> = self
            .term_counts
            .iter()
            .enumerate()
            .filter_map(|(idx, counts)| {
                let score: f64 = terms
                    .iter()
                    .filter_map(|term| {
                        let tf = f64::from(*counts.get(term)?);
                        #[allow(clippy::cast_precision_loss)]
                        let df = *self.doc_freq.get(term)? as f64;
                        Some(tf * (1.0 + n / df).ln())
                    })
                    .sum();
                (score > 0.0).then_some((score, idx))
            })
            .collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then(a.1.cmp(&b.1)));
        scored
            .into_iter()
            .take(k)
            .map(|(_, idx)| &self.chunks[idx])
            .collect()
    }

    /// Retrieved chunks joined by blank lines, ready for a prompt
    pub fn context(&self, query: &str, k: usize) -> String {
        self.retrieve(query, k)
            .into_iter()
            .map(|c| c.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| w.chars().count() > 1)
        .map(str::to_lowercase)
        .filter(|w| !STOPWORDS.contains(&w.as_str()))
}

fn term_counts(text: &str) -> HashMap<String, u32> {
    let mut counts = HashMap::new();
    for term in tokenize(text) {
        *counts.entry(term).or_insert(0) += 1;
    }
    counts
}
