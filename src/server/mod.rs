//! HTTP server
//!
//! Exposes the chat assistant via REST endpoints:
//! - GET  /api/health        - Health check
//! - POST /api/chat          - Score a message and reply
//! - GET  /api/mood-history  - Recent mood entries
//! - POST /api/mood-history  - Record a mood entry
//!
//! Everything else is served from the static asset directory.

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::api::create_router;
use crate::config::Config;
use crate::state::AppState;

/// Run the HTTP server until Ctrl-C / SIGTERM
pub async fn run(config: Config) -> Result<()> {
    let state = AppState::from_config(&config);
    let app = create_router(state, &config)?;

    let bind_address = config.bind_address();
    let listener = TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("failed to bind {bind_address}"))?;

    info!("Server listening on http://{}", bind_address);
    info!(
        "Static assets: {} | history capacity: {}",
        config.static_dir.display(),
        config.history_capacity
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
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
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, draining connections...");
}
