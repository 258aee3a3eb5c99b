//! Core traits and types for the tutor voice agent
//!
//! This crate provides foundational types used across all other crates:
//! - Language and voice selection
//! - Participant metadata resolution
//! - Usage counters and cost estimation
//! - Trait seams for the external room/session framework and retrieval
//! - Error types

pub mod error;
pub mod language;
pub mod metadata;
pub mod traits;
pub mod usage;
pub mod voice;

pub use error::{Error, Result};
pub use language::Language;
pub use metadata::ParticipantProfile;
pub use usage::{CostBreakdown, UsageDelta, UsageSummary};
pub use voice::{VoiceGender, VoiceInfo};

pub use traits::{
    // Retrieval
    Passage, Retriever,
    // Room/session seam
    ContentPart, MediaRoom, ParticipantInfo, PipelineSpec, RoomEvent, SessionControl,
    SessionStartRequest, ToolDefinition,
};
