//! Wire protocol frames
//!
//! JSON text frames, tagged by `type`. The server side of this protocol is
//! the media server's agent endpoint.

use serde::{Deserialize, Serialize};

use tutor_agent_core::{ContentPart, ParticipantInfo, RoomEvent, SessionStartRequest, UsageDelta};

/// Frames sent by the agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientFrame {
    /// Join a room with the given identity
    Join { room: String, identity: String },
    /// Start the voice session
    StartSession {
        session_id: String,
        #[serde(flatten)]
        request: SessionStartRequest,
    },
    /// Replace the active instruction set (next response onward)
    UpdateInstructions {
        session_id: String,
        instructions: String,
    },
    /// Result of a tool invocation
    ToolResult {
        session_id: String,
        call_id: String,
        output: String,
    },
    /// Leave the room
    Leave,
}

/// Frames sent by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerFrame {
    /// Join acknowledgement with the room's participant snapshot
    Joined {
        #[serde(default)]
        local: Option<ParticipantInfo>,
        #[serde(default)]
        remotes: Vec<ParticipantInfo>,
    },
    /// A participant joined after the agent
    ParticipantConnected { participant: ParticipantInfo },
    /// The user finished an utterance
    TurnCompleted {
        #[serde(default)]
        content: Vec<ContentPart>,
    },
    /// Per-turn pipeline usage metrics
    Metrics { usage: UsageDelta },
    /// The pipeline invoked a tool
    ToolCall {
        call_id: String,
        name: String,
        #[serde(default)]
        arguments: serde_json::Value,
    },
    /// The room closed
    Closed {
        #[serde(default)]
        reason: String,
    },
}

impl ServerFrame {
    /// Map a post-join frame to its room event. `Joined` has no event; it
    /// is consumed by the connect handshake.
    pub fn into_event(self) -> Option<RoomEvent> {
        match self {
            ServerFrame::Joined { .. } => None,
            ServerFrame::ParticipantConnected { participant } => {
                Some(RoomEvent::ParticipantConnected(participant))
            }
            ServerFrame::TurnCompleted { content } => {
                Some(RoomEvent::UserTurnCompleted { content })
            }
            ServerFrame::Metrics { usage } => Some(RoomEvent::MetricsCollected(usage)),
            ServerFrame::ToolCall {
                call_id,
                name,
                arguments,
            } => Some(RoomEvent::ToolCall {
                call_id,
                name,
                arguments,
            }),
            ServerFrame::Closed { reason } => Some(RoomEvent::Closed { reason }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_frame_shape() {
        let json = serde_json::to_value(ClientFrame::Join {
            room: "tutor".to_string(),
            identity: "tutor-agent".to_string(),
        })
        .unwrap();
        assert_eq!(json["type"], "join");
        assert_eq!(json["room"], "tutor");
    }

    #[test]
    fn test_turn_completed_decodes_mixed_content() {
        let frame: ServerFrame = serde_json::from_str(
            r#"{"type":"turn_completed","content":[
                {"kind":"audio","duration_secs":1.2},
                {"kind":"text","text":"What is Mavena?"}
            ]}"#,
        )
        .unwrap();
        match frame.into_event() {
            Some(RoomEvent::UserTurnCompleted { content }) => {
                assert_eq!(content.len(), 2);
                assert_eq!(
                    content[1],
                    ContentPart::Text {
                        text: "What is Mavena?".to_string()
                    }
                );
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn test_metrics_frame_defaults_missing_counters() {
        let frame: ServerFrame = serde_json::from_str(
            r#"{"type":"metrics","usage":{"llm_prompt_tokens":12}}"#,
        )
        .unwrap();
        match frame {
            ServerFrame::Metrics { usage } => {
                assert_eq!(usage.llm_prompt_tokens, 12);
                assert_eq!(usage.llm_completion_tokens, 0);
            }
            other => panic!("unexpected frame: {:?}", other),
        }
    }

    #[test]
    fn test_joined_has_no_event() {
        let frame: ServerFrame =
            serde_json::from_str(r#"{"type":"joined","remotes":[]}"#).unwrap();
        assert!(frame.into_event().is_none());
    }
}
