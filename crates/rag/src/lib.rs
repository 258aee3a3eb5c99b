//! Retrieval for per-turn instruction augmentation
//!
//! The document index is built offline and is read-only here. Retrieval is
//! two hops: embed the (normalized) query via a hosted embeddings API, then
//! similarity-search the Qdrant collection. Ranking is entirely the
//! store's; this crate only maps results.

pub mod context;
pub mod embeddings;
pub mod store;
pub mod vector_store;

pub use context::join_passages;
pub use embeddings::{EmbeddingClient, EmbeddingConfig};
pub use store::{DocumentStore, DocumentStoreConfig};
pub use vector_store::{VectorStore, VectorStoreConfig};

use thiserror::Error;

/// RAG errors
#[derive(Error, Debug)]
pub enum RagError {
    #[error("Embedding error: {0}")]
    Embedding(String),

    #[error("Vector store error: {0}")]
    VectorStore(String),

    #[error("Connection error: {0}")]
    Connection(String),
}

impl From<RagError> for tutor_agent_core::Error {
    fn from(err: RagError) -> Self {
        tutor_agent_core::Error::Rag(err.to_string())
    }
}
