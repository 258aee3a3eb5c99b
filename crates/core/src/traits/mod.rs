//! Trait seams for pluggable backends
//!
//! The voice pipeline, the media room, and the document store are all
//! external. These traits are the boundary the agent crates program
//! against; tests drive them with in-memory fakes.

pub mod retriever;
pub mod room;

pub use retriever::{Passage, Retriever};
pub use room::{
    ContentPart, MediaRoom, ParticipantInfo, PipelineSpec, RoomEvent, SessionControl,
    SessionStartRequest, ToolDefinition,
};
