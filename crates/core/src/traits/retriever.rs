//! Retrieval seam for RAG

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::Result;

/// A passage retrieved from the document store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Passage {
    /// Source identifier (document path or id)
    pub source: String,
    /// Passage text
    pub text: String,
    /// Similarity score as reported by the store
    pub score: f32,
}

/// Similarity lookup over a pre-built document index.
///
/// Implementations delegate ranking entirely to the underlying store and
/// return passages in descending score order. An empty result is `Ok` with
/// an empty vector, never an error.
#[async_trait]
pub trait Retriever: Send + Sync + 'static {
    /// Retrieve up to `top_k` passages relevant to `query`.
    async fn retrieve(&self, query: &str, top_k: usize) -> Result<Vec<Passage>>;

    /// Retriever name for logging
    fn name(&self) -> &str;
}
