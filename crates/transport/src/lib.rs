//! WebSocket room/session client
//!
//! The media server owns rooms, the audio path, and the voice pipeline.
//! This crate speaks its JSON frame protocol and exposes the connection
//! through the core `MediaRoom`/`SessionControl` seams.

pub mod room;
pub mod wire;

pub use room::{RoomClient, RoomClientConfig, SessionHandle};
pub use wire::{ClientFrame, ServerFrame};

use thiserror::Error;

/// Transport errors
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("WebSocket error: {0}")]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),

    #[error("Protocol error: {0}")]
    Protocol(String),

    #[error("Connection closed")]
    Closed,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<TransportError> for tutor_agent_core::Error {
    fn from(err: TransportError) -> Self {
        tutor_agent_core::Error::Transport(err.to_string())
    }
}
