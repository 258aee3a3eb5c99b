//! Configuration for the tutor voice agent
//!
//! Settings layer environment variables over YAML files over built-in
//! defaults. Prompt templates and their fixed substitution constants live
//! here as well.

pub mod prompts;
pub mod settings;

pub use prompts::{EMPTY_CONTEXT_PLACEHOLDER, PASSAGE_SEPARATOR, SYSTEM_PROMPT_TEMPLATE};
pub use settings::{
    load_settings, Credentials, ObservabilityConfig, PipelineConfig, RagConfig, RoomConfig,
    RuntimeEnvironment, Settings,
};

use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Missing required credential: {0}")]
    MissingCredential(&'static str),

    #[error("Invalid credential {name}: {reason}")]
    InvalidCredential { name: &'static str, reason: String },
}

impl From<ConfigError> for tutor_agent_core::Error {
    fn from(err: ConfigError) -> Self {
        tutor_agent_core::Error::Config(err.to_string())
    }
}
