//! Room client
//!
//! One WebSocket connection per room. After the join handshake the
//! connection splits into a reader task (server frames -> room events) and
//! a writer task (queued client frames -> socket). The `SessionHandle`
//! cloned out of the client is the only way the agent talks back.

use std::time::Duration;

use async_trait::async_trait;
use futures::stream::{SplitSink, SplitStream};
use futures::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio_tungstenite::{connect_async, tungstenite::Message, MaybeTlsStream, WebSocketStream};
use uuid::Uuid;

use tutor_agent_core::{
    MediaRoom, ParticipantInfo, Result, RoomEvent, SessionControl, SessionStartRequest,
};

use crate::wire::{ClientFrame, ServerFrame};
use crate::TransportError;

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

const JOIN_HANDSHAKE_TIMEOUT: Duration = Duration::from_secs(10);
const OUTBOUND_BUFFER: usize = 32;
const EVENT_BUFFER: usize = 64;

/// Room client configuration
#[derive(Debug, Clone)]
pub struct RoomClientConfig {
    /// WebSocket URL of the media server's agent endpoint
    pub url: String,
    /// Room to join
    pub room: String,
    /// Identity the agent joins with
    pub identity: String,
}

/// Control handle for the voice session, cloneable across tasks
#[derive(Clone)]
pub struct SessionHandle {
    session_id: String,
    tx: mpsc::Sender<String>,
}

impl SessionHandle {
    async fn send(&self, frame: &ClientFrame) -> std::result::Result<(), TransportError> {
        let text = serde_json::to_string(frame)?;
        self.tx.send(text).await.map_err(|_| TransportError::Closed)
    }

    /// Session identifier used on the wire
    pub fn session_id(&self) -> &str {
        &self.session_id
    }
}

#[async_trait]
impl SessionControl for SessionHandle {
    async fn start(&self, request: SessionStartRequest) -> Result<()> {
        self.send(&ClientFrame::StartSession {
            session_id: self.session_id.clone(),
            request,
        })
        .await
        .map_err(Into::into)
    }

    async fn update_instructions(&self, instructions: &str) -> Result<()> {
        self.send(&ClientFrame::UpdateInstructions {
            session_id: self.session_id.clone(),
            instructions: instructions.to_string(),
        })
        .await
        .map_err(Into::into)
    }

    async fn tool_result(&self, call_id: &str, output: &str) -> Result<()> {
        self.send(&ClientFrame::ToolResult {
            session_id: self.session_id.clone(),
            call_id: call_id.to_string(),
            output: output.to_string(),
        })
        .await
        .map_err(Into::into)
    }
}

/// WebSocket-backed media room
pub struct RoomClient {
    config: RoomClientConfig,
    session_id: String,
    cmd_tx: mpsc::Sender<String>,
    cmd_rx: Option<mpsc::Receiver<String>>,
    events: Option<mpsc::Receiver<RoomEvent>>,
    local: Option<ParticipantInfo>,
    remotes: Vec<ParticipantInfo>,
}

impl RoomClient {
    pub fn new(config: RoomClientConfig) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel(OUTBOUND_BUFFER);
        Self {
            config,
            session_id: Uuid::new_v4().to_string(),
            cmd_tx,
            cmd_rx: Some(cmd_rx),
            events: None,
            local: None,
            remotes: Vec::new(),
        }
    }

    async fn connect_inner(&mut self) -> std::result::Result<(), TransportError> {
        let cmd_rx = self
            .cmd_rx
            .take()
            .ok_or_else(|| TransportError::Protocol("already connected".to_string()))?;

        tracing::info!(url = %self.config.url, room = %self.config.room, "connecting to room");
        let (ws, _) = connect_async(self.config.url.as_str()).await?;
        let (mut sink, mut stream) = ws.split();

        let join = serde_json::to_string(&ClientFrame::Join {
            room: self.config.room.clone(),
            identity: self.config.identity.clone(),
        })?;
        sink.send(Message::Text(join)).await?;

        let (local, remotes) =
            tokio::time::timeout(JOIN_HANDSHAKE_TIMEOUT, await_join_ack(&mut stream))
                .await
                .map_err(|_| {
                    TransportError::Protocol("timed out waiting for join ack".to_string())
                })??;
        tracing::info!(
            room = %self.config.room,
            remote_count = remotes.len(),
            "connected to room"
        );

        self.local = local;
        self.remotes = remotes;

        let (event_tx, event_rx) = mpsc::channel(EVENT_BUFFER);
        self.events = Some(event_rx);
        tokio::spawn(read_loop(stream, event_tx));
        tokio::spawn(write_loop(sink, cmd_rx));

        Ok(())
    }
}

#[async_trait]
impl MediaRoom for RoomClient {
    type Session = SessionHandle;

    async fn connect(&mut self) -> Result<()> {
        self.connect_inner().await.map_err(Into::into)
    }

    fn local_participant(&self) -> Option<ParticipantInfo> {
        self.local.clone()
    }

    fn remote_participants(&self) -> Vec<ParticipantInfo> {
        self.remotes.clone()
    }

    fn session(&self) -> SessionHandle {
        SessionHandle {
            session_id: self.session_id.clone(),
            tx: self.cmd_tx.clone(),
        }
    }

    async fn next_event(&mut self) -> Option<RoomEvent> {
        match self.events.as_mut() {
            Some(events) => events.recv().await,
            None => None,
        }
    }
}

/// Read frames until the join acknowledgement arrives.
async fn await_join_ack(
    stream: &mut SplitStream<WsStream>,
) -> std::result::Result<(Option<ParticipantInfo>, Vec<ParticipantInfo>), TransportError> {
    while let Some(msg) = stream.next().await {
        match msg? {
            Message::Text(text) => match serde_json::from_str::<ServerFrame>(&text)? {
                ServerFrame::Joined { local, remotes } => return Ok((local, remotes)),
                other => {
                    return Err(TransportError::Protocol(format!(
                        "expected join ack, got {:?}",
                        other
                    )))
                }
            },
            Message::Ping(_) | Message::Pong(_) => continue,
            Message::Close(_) => return Err(TransportError::Closed),
            other => {
                return Err(TransportError::Protocol(format!(
                    "unexpected frame during handshake: {:?}",
                    other
                )))
            }
        }
    }
    Err(TransportError::Closed)
}

async fn read_loop(mut stream: SplitStream<WsStream>, events: mpsc::Sender<RoomEvent>) {
    while let Some(msg) = stream.next().await {
        let msg = match msg {
            Ok(msg) => msg,
            Err(e) => {
                tracing::warn!(error = %e, "room connection lost");
                break;
            }
        };

        match msg {
            Message::Text(text) => {
                let frame = match serde_json::from_str::<ServerFrame>(&text) {
                    Ok(frame) => frame,
                    Err(e) => {
                        tracing::warn!(error = %e, "ignoring undecodable server frame");
                        continue;
                    }
                };
                if let Some(event) = frame.into_event() {
                    let is_close = matches!(event, RoomEvent::Closed { .. });
                    if events.send(event).await.is_err() || is_close {
                        break;
                    }
                }
            }
            Message::Close(_) => {
                let _ = events
                    .send(RoomEvent::Closed {
                        reason: "connection closed".to_string(),
                    })
                    .await;
                break;
            }
            // Pongs are queued automatically by tungstenite on Ping
            _ => {}
        }
    }
}

async fn write_loop(mut sink: SplitSink<WsStream, Message>, mut cmd_rx: mpsc::Receiver<String>) {
    while let Some(text) = cmd_rx.recv().await {
        if let Err(e) = sink.send(Message::Text(text)).await {
            tracing::warn!(error = %e, "failed to send frame, dropping connection");
            break;
        }
    }
    let _ = sink.close().await;
}
