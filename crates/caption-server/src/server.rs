//! HTTP server assembly and lifecycle.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::signal;
use tracing::info;

use caption_core::{CaptionResult, ModelConfig, ServerConfig};

use crate::service::{self, AppState};

/// The captioned speech HTTP server.
pub struct CaptionServer {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl CaptionServer {
    /// Create a new server. The model is not loaded until first use.
    pub fn new(config: ServerConfig, model: ModelConfig) -> Self {
        Self {
            config,
            state: Arc::new(AppState::new(model)),
        }
    }

    /// Build the HTTP router backed by this server's state.
    pub fn router(&self) -> Router {
        app_router(Arc::clone(&self.state))
    }

    /// Run the server until a shutdown signal arrives.
    pub async fn run(self) -> CaptionResult<()> {
        let addr = self.config.bind_addr()?;
        let app = app_router(self.state);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        info!(addr = %addr, "HTTP server listening");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

/// Build the service router over shared handler state.
pub fn app_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(service::health))
        .route("/v1/models", get(service::models))
        .route("/dev/captioned_speech", post(service::captioned_speech))
        .with_state(state)
}

/// Wait for shutdown signal (SIGINT or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
