//! Logs Mock HTTP Server binary entry point.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use logs_mock::LogStore;
use logs_mock::server::{CliArgs, LogServer, LogServerConfig};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = CliArgs::parse();

    let store_config = args.to_store_config();
    let server_config = LogServerConfig::from(&args);

    tracing::info!("Generating log corpus with config: {:?}", store_config);
    let store = LogStore::generate(&store_config);
    tracing::info!("Generated {} log records", store.len());

    let server = LogServer::new(Arc::new(store), server_config);
    if let Err(e) = server.run().await {
        tracing::error!("Server failed: {}", e);
        std::process::exit(1);
    }
}
