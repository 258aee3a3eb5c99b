//! Tutor agent worker entry point
//!
//! Loads configuration and credentials, joins the configured room, and
//! runs the session orchestrator until the room closes or the process is
//! asked to shut down.

use std::sync::Arc;

use tutor_agent_agent::{SessionConfig, SessionOrchestrator, ToolRegistry};
use tutor_agent_config::{load_settings, Credentials, Settings};
use tutor_agent_core::Retriever;
use tutor_agent_rag::{DocumentStore, DocumentStoreConfig};
use tutor_agent_transport::{RoomClient, RoomClientConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Local development keeps credentials in .env.local; absence is fine.
    let _ = dotenvy::from_filename(".env.local");

    let env = std::env::var("TUTOR_AGENT_ENV").ok();
    let settings = match load_settings(env.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            // Tracing not yet initialized, use eprintln for early logging
            eprintln!("Warning: Failed to load config: {}. Using defaults.", e);
            Settings::default()
        }
    };

    init_tracing(&settings);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = ?settings.environment,
        config_env = env.as_deref().unwrap_or("default"),
        "starting tutor agent worker"
    );

    // Missing credentials are a startup failure, not something to limp past.
    let credentials = Credentials::from_env()?;

    let retriever: Arc<dyn Retriever> = Arc::new(DocumentStore::new(
        DocumentStoreConfig::from_settings(&settings.rag, &credentials.openai_api_key),
    )?);
    tracing::info!(
        collection = %settings.rag.collection,
        top_k = settings.rag.top_k,
        "document store ready"
    );

    let room = RoomClient::new(RoomClientConfig {
        url: settings.room.url.clone(),
        room: settings.room.name.clone(),
        identity: settings.room.agent_identity.clone(),
    });

    let orchestrator = SessionOrchestrator::new(
        room,
        retriever,
        ToolRegistry::with_builtin_tools(),
        SessionConfig {
            pipeline: settings.pipeline.to_spec(),
            user_away_timeout_secs: settings.room.user_away_timeout_secs,
            top_k: settings.rag.top_k,
            ..Default::default()
        },
    );

    let summary = orchestrator.run(shutdown_signal()).await?;
    tracing::info!(total_cost = summary.cost().total, "worker exiting");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}

fn init_tracing(settings: &Settings) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| settings.observability.log_level.clone().into());

    if settings.observability.json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
