//! Media room and voice session seams
//!
//! The room delivers participant and pipeline events; the session control
//! handle carries instructions (and their per-turn replacements) to the
//! pipeline. Audio, VAD, STT, TTS, and turn detection all live on the other
//! side of this boundary.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::usage::UsageDelta;
use crate::voice::VoiceInfo;
use crate::Result;

/// A participant as seen by the room
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParticipantInfo {
    pub identity: String,
    /// Opaque consumer-supplied metadata string, if any
    #[serde(default)]
    pub metadata: Option<String>,
}

/// One part of a completed user turn. Turns are heterogeneous; the agent
/// only consumes the first text part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentPart {
    Text { text: String },
    Audio { duration_secs: f64 },
    Image { url: String },
}

/// Events delivered by the room while a session is active
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RoomEvent {
    /// A participant joined after the agent connected
    ParticipantConnected(ParticipantInfo),
    /// The user finished an utterance; content parts are in pipeline order
    UserTurnCompleted { content: Vec<ContentPart> },
    /// The pipeline invoked one of the agent's tools
    ToolCall {
        call_id: String,
        name: String,
        arguments: serde_json::Value,
    },
    /// Per-turn usage metrics from the pipeline
    MetricsCollected(UsageDelta),
    /// The room closed (disconnect, away-timeout, shutdown)
    Closed { reason: String },
}

/// Model identifiers for the hosted pipeline services
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineSpec {
    pub llm_model: String,
    pub stt_model: String,
    pub stt_language: String,
    /// Standard voices do not support streaming synthesis
    pub tts_streaming: bool,
}

impl Default for PipelineSpec {
    fn default() -> Self {
        Self {
            llm_model: "gpt-4o-mini".to_string(),
            stt_model: "nova-3".to_string(),
            stt_language: "multi".to_string(),
            tts_streaming: false,
        }
    }
}

/// Tool surface advertised to the pipeline at session start
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    /// JSON schema for the tool arguments
    pub parameters: serde_json::Value,
}

/// Everything the external session needs to start
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionStartRequest {
    pub instructions: String,
    pub voice: VoiceInfo,
    pub pipeline: PipelineSpec,
    /// Disconnect after this many seconds without user input; enforced by
    /// the framework, not by this process
    pub user_away_timeout_secs: f64,
    pub tools: Vec<ToolDefinition>,
}

/// Control handle for the running voice session
#[async_trait]
pub trait SessionControl: Send + Sync {
    /// Start the voice session with its initial instructions.
    async fn start(&self, request: SessionStartRequest) -> Result<()>;

    /// Replace the active instruction set. Takes effect from the next model
    /// response; conversation history is preserved.
    async fn update_instructions(&self, instructions: &str) -> Result<()>;

    /// Return a tool invocation result to the pipeline.
    async fn tool_result(&self, call_id: &str, output: &str) -> Result<()>;
}

/// A media room the agent joins as a participant
#[async_trait]
pub trait MediaRoom: Send {
    type Session: SessionControl + 'static;

    /// Connect to the room. Participant snapshots are valid afterwards.
    async fn connect(&mut self) -> Result<()>;

    /// The agent's own participant, if the server reports one
    fn local_participant(&self) -> Option<ParticipantInfo>;

    /// Remote participants present at connect time
    fn remote_participants(&self) -> Vec<ParticipantInfo>;

    /// Control handle for the voice session in this room
    fn session(&self) -> Self::Session;

    /// Next room event; `None` when the connection is gone.
    async fn next_event(&mut self) -> Option<RoomEvent>;
}
