//! Umbrella error type
//!
//! Member crates define their own `thiserror` enums and convert into this
//! one at the crate boundary.

use thiserror::Error;

/// Top-level error for the tutor agent
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Retrieval error: {0}")]
    Rag(String),

    #[error("Agent error: {0}")]
    Agent(String),

    #[error("Tool error: {0}")]
    Tool(String),
}

/// Convenience result alias
pub type Result<T> = std::result::Result<T, Error>;
