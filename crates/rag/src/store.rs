//! Document store adapter
//!
//! Implements the core `Retriever` seam: normalize the query, embed it,
//! search the index, map hits to passages. No local ranking.

use async_trait::async_trait;

use tutor_agent_config::RagConfig;
use tutor_agent_core::{Passage, Result, Retriever};

use crate::embeddings::{EmbeddingClient, EmbeddingConfig};
use crate::vector_store::{VectorStore, VectorStoreConfig};

/// Document store configuration
#[derive(Debug, Clone, Default)]
pub struct DocumentStoreConfig {
    pub embedding: EmbeddingConfig,
    pub vector_store: VectorStoreConfig,
}

impl DocumentStoreConfig {
    /// Build from settings plus the embeddings API key
    pub fn from_settings(rag: &RagConfig, api_key: &str) -> Self {
        Self {
            embedding: EmbeddingConfig {
                endpoint: rag.embedding_endpoint.clone(),
                model: rag.embedding_model.clone(),
                api_key: api_key.to_string(),
                ..Default::default()
            },
            vector_store: VectorStoreConfig {
                endpoint: rag.qdrant_endpoint.clone(),
                collection: rag.collection.clone(),
                api_key: None,
            },
        }
    }
}

/// Similarity lookup over the pre-built document index
pub struct DocumentStore {
    embedder: EmbeddingClient,
    store: VectorStore,
}

impl DocumentStore {
    pub fn new(config: DocumentStoreConfig) -> Result<Self> {
        let embedder = EmbeddingClient::new(config.embedding).map_err(tutor_agent_core::Error::from)?;
        let store = VectorStore::new(config.vector_store).map_err(tutor_agent_core::Error::from)?;
        Ok(Self { embedder, store })
    }
}

/// Remove spaces, tabs, and newlines from the query before lookup.
///
/// The existing index has always been queried this way, so changing it
/// would shift every score. Note it also removes the spaces BETWEEN words.
/// TODO: measure recall against word-boundary-preserving normalization
/// before the next index rebuild.
pub(crate) fn normalize_query(query: &str) -> String {
    query
        .chars()
        .filter(|c| !matches!(c, ' ' | '\t' | '\n'))
        .collect()
}

#[async_trait]
impl Retriever for DocumentStore {
    async fn retrieve(&self, query: &str, top_k: usize) -> Result<Vec<Passage>> {
        let normalized = normalize_query(query);
        if normalized.is_empty() {
            return Ok(Vec::new());
        }

        let vector = self.embedder.embed(&normalized).await.map_err(tutor_agent_core::Error::from)?;
        let hits = self
            .store
            .search(&vector, top_k)
            .await
            .map_err(tutor_agent_core::Error::from)?;

        for hit in &hits {
            tracing::debug!(source = %hit.source, score = hit.score, "retrieved passage");
        }

        Ok(hits
            .into_iter()
            .map(|hit| Passage {
                source: hit.source,
                text: hit.text,
                score: hit.score,
            })
            .collect())
    }

    fn name(&self) -> &str {
        "document_store"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_all_whitespace() {
        assert_eq!(normalize_query("What is Mavena?"), "WhatisMavena?");
        assert_eq!(normalize_query("a\tb\nc d"), "abcd");
    }

    #[test]
    fn test_normalize_keeps_punctuation_and_case() {
        assert_eq!(normalize_query("Hello, World!"), "Hello,World!");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize_query("  \n\t "), "");
    }
}
