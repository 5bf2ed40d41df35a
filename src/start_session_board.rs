//! Startup helpers for the session board server.

use std::future::Future;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;

use crate::server::{self, AppState, ServerConfig};

/// Run the server until it stops.
///
/// # Returns
/// `ExitCode::SUCCESS` on graceful shutdown, `1` on failure.
#[must_use]
pub fn run() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting session board v{}", env!("CARGO_PKG_VERSION"));

    let config = ServerConfig::from_env();
    let state = match initialize(&config) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Failed to create state: {e:#}");
            return ExitCode::from(1);
        }
    };

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("Failed to create runtime: {e}");
            return ExitCode::from(1);
        }
    };

    if let Err(e) = rt.block_on(server::run_server(state, config.port)) {
        tracing::error!("Server error: {e}");
        return ExitCode::from(1);
    }

    ExitCode::SUCCESS
}

/// Initialize application state without starting the server.
///
/// # Errors
/// Returns an error if state creation fails.
pub fn initialize(config: &ServerConfig) -> anyhow::Result<Arc<AppState>> {
    tracing::info!("Model endpoint: {} ({})", config.llm.base_url, config.llm.model);
    if config.llm.api_key.is_none() {
        tracing::warn!("OPENAI_API_KEY is not set; /api/qotd will fail");
    }

    AppState::new(config).context("failed to create the question-of-the-day client")
}

/// Run server with graceful shutdown.
///
/// # Errors
/// Returns an error if the server fails.
pub async fn run_server_with_shutdown<F>(
    state: Arc<AppState>,
    port: u16,
    shutdown_signal: F,
) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    server::run_server_with_shutdown(state, port, shutdown_signal)
        .await
        .context("session board server failed")
}
