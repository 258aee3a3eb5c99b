//! Main settings module

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use tutor_agent_core::PipelineSpec;

use crate::ConfigError;

/// Runtime environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeEnvironment {
    #[default]
    Development,
    Staging,
    Production,
}

impl RuntimeEnvironment {
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Runtime environment (development, staging, production)
    #[serde(default)]
    pub environment: RuntimeEnvironment,

    /// Media room connection
    #[serde(default)]
    pub room: RoomConfig,

    /// Hosted pipeline model identifiers
    #[serde(default)]
    pub pipeline: PipelineConfig,

    /// Retrieval configuration
    #[serde(default)]
    pub rag: RagConfig,

    /// Observability configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Media room connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomConfig {
    /// WebSocket URL of the media server
    #[serde(default = "default_room_url")]
    pub url: String,
    /// Room to join
    #[serde(default = "default_room_name")]
    pub name: String,
    /// Identity the agent joins with
    #[serde(default = "default_agent_identity")]
    pub agent_identity: String,
    /// Disconnect after this many seconds of no user input (enforced by
    /// the external framework)
    #[serde(default = "default_user_away_timeout")]
    pub user_away_timeout_secs: f64,
}

fn default_room_url() -> String {
    "ws://127.0.0.1:7880/agent".to_string()
}

fn default_room_name() -> String {
    "tutor".to_string()
}

fn default_agent_identity() -> String {
    "tutor-agent".to_string()
}

fn default_user_away_timeout() -> f64 {
    20.0
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            url: default_room_url(),
            name: default_room_name(),
            agent_identity: default_agent_identity(),
            user_away_timeout_secs: default_user_away_timeout(),
        }
    }
}

/// Hosted pipeline model identifiers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    #[serde(default = "default_llm_model")]
    pub llm_model: String,
    #[serde(default = "default_stt_model")]
    pub stt_model: String,
    #[serde(default = "default_stt_language")]
    pub stt_language: String,
    /// Standard TTS voices do not support streaming synthesis
    #[serde(default)]
    pub tts_streaming: bool,
}

fn default_llm_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_stt_model() -> String {
    "nova-3".to_string()
}

fn default_stt_language() -> String {
    "multi".to_string()
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            llm_model: default_llm_model(),
            stt_model: default_stt_model(),
            stt_language: default_stt_language(),
            tts_streaming: false,
        }
    }
}

impl PipelineConfig {
    /// Convert to the wire-level pipeline spec
    pub fn to_spec(&self) -> PipelineSpec {
        PipelineSpec {
            llm_model: self.llm_model.clone(),
            stt_model: self.stt_model.clone(),
            stt_language: self.stt_language.clone(),
            tts_streaming: self.tts_streaming,
        }
    }
}

/// Retrieval configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RagConfig {
    /// Qdrant endpoint
    #[serde(default = "default_qdrant_endpoint")]
    pub qdrant_endpoint: String,
    /// Collection holding the pre-built document index (read-only)
    #[serde(default = "default_collection")]
    pub collection: String,
    /// Passages retrieved per query
    #[serde(default = "default_top_k")]
    pub top_k: usize,
    /// Embedding model; must match the model the index was built with
    #[serde(default = "default_embedding_model")]
    pub embedding_model: String,
    /// OpenAI-compatible embeddings endpoint
    #[serde(default = "default_embedding_endpoint")]
    pub embedding_endpoint: String,
}

fn default_qdrant_endpoint() -> String {
    "http://127.0.0.1:6334".to_string()
}

fn default_collection() -> String {
    "curriculum".to_string()
}

fn default_top_k() -> usize {
    5
}

fn default_embedding_model() -> String {
    "text-embedding-3-small".to_string()
}

fn default_embedding_endpoint() -> String {
    "https://api.openai.com/v1/embeddings".to_string()
}

impl Default for RagConfig {
    fn default() -> Self {
        Self {
            qdrant_endpoint: default_qdrant_endpoint(),
            collection: default_collection(),
            top_k: default_top_k(),
            embedding_model: default_embedding_model(),
            embedding_endpoint: default_embedding_endpoint(),
        }
    }
}

/// Observability configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level filter (overridden by RUST_LOG)
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Emit JSON log lines instead of human-readable ones
    #[serde(default)]
    pub json_logs: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json_logs: false,
        }
    }
}

/// Load settings from files and environment.
///
/// Priority: env vars (`TUTOR_AGENT_*`) > `config/{env}.yaml` >
/// `config/default.yaml` > built-in defaults. Missing files are fine.
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder().add_source(File::with_name("config/default").required(false));

    if let Some(env) = env {
        builder = builder.add_source(File::with_name(&format!("config/{}", env)).required(false));
    }

    let config = builder
        .add_source(Environment::with_prefix("TUTOR_AGENT").separator("__"))
        .build()?;

    Ok(config.try_deserialize()?)
}

/// Hosted-service credentials, read from the process environment.
///
/// All three are required; absence is a startup failure, not a runtime
/// fallback.
#[derive(Clone)]
pub struct Credentials {
    /// OpenAI API key (LLM + embeddings)
    pub openai_api_key: String,
    /// Deepgram API key (STT)
    pub deepgram_api_key: String,
    /// Google service-account credentials, as a JSON blob (TTS)
    pub google_credentials_json: String,
}

impl Credentials {
    pub fn from_env() -> Result<Self, ConfigError> {
        let credentials = Self {
            openai_api_key: require_env("OPENAI_API_KEY")?,
            deepgram_api_key: require_env("DEEPGRAM_API_KEY")?,
            google_credentials_json: require_env("GOOGLE_APPLICATION_CREDENTIALS_JSON")?,
        };

        // The Google credential must at least be well-formed JSON; the TTS
        // provider rejects it much later otherwise.
        if let Err(e) = serde_json::from_str::<serde_json::Value>(&credentials.google_credentials_json)
        {
            return Err(ConfigError::InvalidCredential {
                name: "GOOGLE_APPLICATION_CREDENTIALS_JSON",
                reason: e.to_string(),
            });
        }

        Ok(credentials)
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("openai_api_key", &"<redacted>")
            .field("deepgram_api_key", &"<redacted>")
            .field("google_credentials_json", &"<redacted>")
            .finish()
    }
}

fn require_env(name: &'static str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::MissingCredential(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.room.user_away_timeout_secs, 20.0);
        assert_eq!(settings.rag.top_k, 5);
        assert_eq!(settings.pipeline.llm_model, "gpt-4o-mini");
        assert!(!settings.pipeline.tts_streaming);
    }

    #[test]
    fn test_load_without_files_uses_defaults() {
        let settings = load_settings(None).expect("defaults should load");
        assert_eq!(settings.rag.embedding_model, "text-embedding-3-small");
        assert_eq!(settings.environment, RuntimeEnvironment::Development);
    }

    #[test]
    fn test_credentials_debug_is_redacted() {
        let creds = Credentials {
            openai_api_key: "sk-secret".to_string(),
            deepgram_api_key: "dg-secret".to_string(),
            google_credentials_json: "{}".to_string(),
        };
        let debug = format!("{:?}", creds);
        assert!(!debug.contains("secret"));
        assert!(debug.contains("<redacted>"));
    }
}
