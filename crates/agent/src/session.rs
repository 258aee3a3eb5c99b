//! Session orchestrator
//!
//! One orchestrator per room, running as a single cooperative task. It
//! suspends only at the framework boundaries: connecting, starting the
//! session, and waiting for the next room event. Per-turn retrieval and
//! composition are strictly sequential.

use std::future::Future;
use std::sync::Arc;

use tutor_agent_config::SYSTEM_PROMPT_TEMPLATE;
use tutor_agent_core::{
    ContentPart, MediaRoom, ParticipantProfile, PipelineSpec, Result, Retriever, RoomEvent,
    SessionControl, SessionStartRequest, UsageSummary, VoiceInfo,
};
use tutor_agent_rag::join_passages;

use crate::composer::PromptComposer;
use crate::tools::ToolRegistry;
use crate::usage::UsageCollector;

/// Orchestrator configuration
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Instruction template with `{language}`, `{interests}`, and
    /// `{rag_context}` substitution points
    pub template: String,
    /// Model identifiers handed to the external pipeline
    pub pipeline: PipelineSpec,
    /// Disconnect after this many seconds of no user input (enforced by
    /// the framework, not here)
    pub user_away_timeout_secs: f64,
    /// Passages retrieved per user turn
    pub top_k: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            template: SYSTEM_PROMPT_TEMPLATE.to_string(),
            pipeline: PipelineSpec::default(),
            user_away_timeout_secs: 20.0,
            top_k: 5,
        }
    }
}

/// Orchestrator lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Connecting,
    Active,
}

/// Drives one voice session in one room
pub struct SessionOrchestrator<R: MediaRoom> {
    room: R,
    retriever: Arc<dyn Retriever>,
    tools: ToolRegistry,
    config: SessionConfig,
    state: SessionState,
    usage: UsageCollector,
}

impl<R: MediaRoom> SessionOrchestrator<R> {
    pub fn new(room: R, retriever: Arc<dyn Retriever>, tools: ToolRegistry, config: SessionConfig) -> Self {
        Self {
            room,
            retriever,
            tools,
            config,
            state: SessionState::Idle,
            usage: UsageCollector::new(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    fn transition(&mut self, next: SessionState) {
        tracing::info!(from = ?self.state, to = ?next, "session state");
        self.state = next;
    }

    /// Run the session to completion.
    ///
    /// Connects, resolves participant preferences, starts the external
    /// voice session, then loops on room events until the room closes or
    /// `shutdown` resolves. The usage/cost summary is reported exactly
    /// once, on every exit path, including an errored one.
    pub async fn run(mut self, shutdown: impl Future<Output = ()> + Send) -> Result<UsageSummary> {
        let result = self.drive(shutdown).await;

        let summary = self.usage.finish();
        let cost = summary.cost();
        tracing::info!(usage = ?summary, "session usage");
        tracing::info!("Costs: {}", cost);

        result?;
        Ok(summary)
    }

    async fn drive(&mut self, shutdown: impl Future<Output = ()> + Send) -> Result<()> {
        tokio::pin!(shutdown);

        self.transition(SessionState::Connecting);
        self.room.connect().await?;

        // Scan participants already present: local first, then each
        // remote. Later writes win when several set the same key.
        let mut profile = ParticipantProfile::default();
        if let Some(local) = self.room.local_participant() {
            profile.absorb(&local.identity, local.metadata.as_deref());
        }
        for participant in self.room.remote_participants() {
            profile.absorb(&participant.identity, participant.metadata.as_deref());
        }
        tracing::info!(language = %profile.language(), "resolved conversation language");

        let mut composer =
            PromptComposer::new(&self.config.template, profile.language(), profile.interests());
        let session = self.room.session();
        session
            .start(SessionStartRequest {
                instructions: composer.compose_initial(),
                voice: VoiceInfo::for_language(profile.language()),
                pipeline: self.config.pipeline.clone(),
                user_away_timeout_secs: self.config.user_away_timeout_secs,
                tools: self.tools.definitions(),
            })
            .await?;

        self.transition(SessionState::Active);
        loop {
            let event = tokio::select! {
                event = self.room.next_event() => event,
                _ = &mut shutdown => {
                    tracing::info!("shutdown requested, ending session");
                    None
                }
            };
            let Some(event) = event else { break };

            match event {
                RoomEvent::ParticipantConnected(participant) => {
                    profile.absorb(&participant.identity, participant.metadata.as_deref());
                    composer.set_language(profile.language());
                    composer.set_interests(profile.interests());
                }
                RoomEvent::UserTurnCompleted { content } => {
                    match first_text(&content) {
                        Some(text) if !text.trim().is_empty() => {
                            self.augment(&session, &composer, text).await?;
                        }
                        _ => {
                            tracing::debug!("turn carried no text, skipping augmentation");
                        }
                    }
                }
                RoomEvent::ToolCall {
                    call_id,
                    name,
                    arguments,
                } => {
                    let output = match self.tools.execute(&name, arguments).await {
                        Ok(output) => output,
                        Err(e) => {
                            tracing::warn!(tool = %name, error = %e, "tool execution failed");
                            format!("The {} tool is unavailable right now.", name)
                        }
                    };
                    session.tool_result(&call_id, &output).await?;
                }
                RoomEvent::MetricsCollected(delta) => {
                    self.usage.collect(&delta);
                }
                RoomEvent::Closed { reason } => {
                    tracing::info!(%reason, "room closed");
                    break;
                }
            }
        }

        Ok(())
    }

    /// Retrieve context for the utterance and swap in freshly composed
    /// instructions. Retrieval failures keep the previous instructions;
    /// an empty result composes with the placeholder.
    async fn augment<S: SessionControl>(
        &self,
        session: &S,
        composer: &PromptComposer,
        utterance: &str,
    ) -> Result<()> {
        let passages = match self.retriever.retrieve(utterance, self.config.top_k).await {
            Ok(passages) => passages,
            Err(e) => {
                tracing::warn!(error = %e, "retrieval failed, keeping previous instructions");
                return Ok(());
            }
        };

        let context = join_passages(&passages);
        tracing::info!(
            passages = passages.len(),
            preview = %preview(&context),
            "retrieved context for turn"
        );

        session.update_instructions(&composer.compose(&context)).await
    }
}

/// First text part of a heterogeneous turn, if any
fn first_text(content: &[ContentPart]) -> Option<&str> {
    content.iter().find_map(|part| match part {
        ContentPart::Text { text } => Some(text.as_str()),
        _ => None,
    })
}

/// Truncated single-line preview for logs
fn preview(text: &str) -> String {
    const MAX: usize = 120;
    let flat: String = text.chars().map(|c| if c == '\n' { ' ' } else { c }).collect();
    if flat.chars().count() <= MAX {
        flat
    } else {
        let mut out: String = flat.chars().take(MAX).collect();
        out.push_str("...");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_text_skips_non_text_parts() {
        let content = vec![
            ContentPart::Audio { duration_secs: 0.8 },
            ContentPart::Text {
                text: "hello".to_string(),
            },
            ContentPart::Text {
                text: "second".to_string(),
            },
        ];
        assert_eq!(first_text(&content), Some("hello"));
    }

    #[test]
    fn test_first_text_none_without_text() {
        let content = vec![ContentPart::Audio { duration_secs: 0.8 }];
        assert_eq!(first_text(&content), None);
        assert_eq!(first_text(&[]), None);
    }

    #[test]
    fn test_preview_truncates() {
        let long = "x".repeat(200);
        let preview = preview(&long);
        assert!(preview.ends_with("..."));
        assert_eq!(preview.chars().count(), 123);
    }
}
