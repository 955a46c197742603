use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use speech_relay::application::services::{TranscriptionService, TranslationService};
use speech_relay::infrastructure::audio::OpenAiWhisperEngine;
use speech_relay::infrastructure::llm::OpenAiChatClient;
use speech_relay::infrastructure::observability::{TracingConfig, init_tracing};
use speech_relay::infrastructure::storage::LocalScratchStore;
use speech_relay::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(
        &TracingConfig::new(environment.as_str(), settings.logging.json_format),
        settings.server.port,
    );

    let upstream = &settings.upstream;
    let scratch_store = Arc::new(
        LocalScratchStore::new(settings.scratch.directory.clone())
            .context("Failed to prepare scratch directory")?,
    );
    let whisper_engine = Arc::new(OpenAiWhisperEngine::new(
        upstream.api_key.clone(),
        Some(upstream.base_url.clone()),
        Some(upstream.transcription_model.clone()),
        upstream.timeout(),
    )?);
    let chat_client = Arc::new(OpenAiChatClient::new(
        upstream.api_key.clone(),
        Some(upstream.base_url.clone()),
        Some(upstream.chat_model.clone()),
        upstream.timeout(),
    )?);

    if upstream.api_key.is_empty() {
        tracing::warn!("No upstream API key configured, provider calls will be rejected");
    }

    let state = AppState::new(
        Arc::new(TranscriptionService::new(whisper_engine, scratch_store)),
        Arc::new(TranslationService::new(chat_client)),
        settings.clone(),
    );

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid listen address")?;
    tracing::info!(
        scratch_dir = %settings.scratch.directory.display(),
        "Listening on {}",
        addr
    );

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
