//! Vector store using Qdrant
//!
//! Read-only similarity search over a pre-existing collection. Index
//! construction happens offline; this process never writes.

use std::collections::HashMap;

use qdrant_client::{
    qdrant::{value::Kind, SearchPointsBuilder, Value},
    Qdrant,
};

use crate::RagError;

/// Vector store configuration
#[derive(Debug, Clone)]
pub struct VectorStoreConfig {
    /// Qdrant endpoint
    pub endpoint: String,
    /// Collection name
    pub collection: String,
    /// API key (optional)
    pub api_key: Option<String>,
}

impl Default for VectorStoreConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:6334".to_string(),
            collection: "curriculum".to_string(),
            api_key: None,
        }
    }
}

/// One similarity hit
#[derive(Debug, Clone)]
pub struct VectorSearchResult {
    /// Source identifier from the payload ("source" key, "N/A" if absent)
    pub source: String,
    /// Passage text from the payload
    pub text: String,
    /// Similarity score
    pub score: f32,
}

/// Read-only Qdrant search client
pub struct VectorStore {
    client: Qdrant,
    config: VectorStoreConfig,
}

impl VectorStore {
    /// Connect to Qdrant
    pub fn new(config: VectorStoreConfig) -> Result<Self, RagError> {
        let mut builder = Qdrant::from_url(&config.endpoint);

        if let Some(ref api_key) = config.api_key {
            builder = builder.api_key(api_key.clone());
        }

        let client = builder
            .build()
            .map_err(|e| RagError::Connection(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Search the collection, returning hits in descending score order as
    /// ranked by Qdrant. Zero hits is an empty vector, not an error.
    pub async fn search(
        &self,
        vector: &[f32],
        limit: usize,
    ) -> Result<Vec<VectorSearchResult>, RagError> {
        let response = self
            .client
            .search_points(
                SearchPointsBuilder::new(&self.config.collection, vector.to_vec(), limit as u64)
                    .with_payload(true),
            )
            .await
            .map_err(|e| RagError::VectorStore(e.to_string()))?;

        Ok(response
            .result
            .into_iter()
            .map(|point| VectorSearchResult {
                source: payload_str(&point.payload, "source")
                    .unwrap_or_else(|| "N/A".to_string()),
                text: payload_str(&point.payload, "text").unwrap_or_default(),
                score: point.score,
            })
            .collect())
    }

    /// Collection this store searches
    pub fn collection(&self) -> &str {
        &self.config.collection
    }
}

fn payload_str(payload: &HashMap<String, Value>, key: &str) -> Option<String> {
    match payload.get(key)?.kind.as_ref()? {
        Kind::StringValue(s) => Some(s.clone()),
        _ => None,
    }
}
