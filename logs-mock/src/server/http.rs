//! HTTP server implementation for Logs Mock.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};

use super::config::LogServerConfig;
use super::handlers::{AppState, handle_get, handle_health, handle_list, handle_metrics};
use super::metrics::Metrics;
use super::middleware::{MetricsLayer, TracingLayer};
use crate::LogStore;

/// Build the application router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/logs", get(handle_list))
        .route("/logs/{id}", get(handle_get))
        .route("/health", get(handle_health))
        .route("/metrics", get(handle_metrics))
        .layer(TracingLayer::new())
        .layer(MetricsLayer::new(state.metrics.clone()))
        .layer(cors)
        .with_state(state)
}

/// HTTP server for the log service.
pub struct LogServer {
    store: Arc<LogStore>,
    config: LogServerConfig,
}

impl LogServer {
    /// Create a new log server.
    pub fn new(store: Arc<LogStore>, config: LogServerConfig) -> Self {
        Self { store, config }
    }

    /// Run the HTTP server until SIGINT or SIGTERM.
    pub async fn run(self) -> std::io::Result<()> {
        let metrics = Arc::new(Metrics::new());
        let state = AppState::new(self.store, metrics, self.config.default_limit);
        let app = build_router(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.port));
        tracing::info!("Starting Logs Mock HTTP server on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shut down gracefully");
        Ok(())
    }
}

/// Listen for SIGTERM and SIGINT (Ctrl+C).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received SIGINT, starting graceful shutdown"),
        _ = terminate => tracing::info!("Received SIGTERM, starting graceful shutdown"),
    }
}
