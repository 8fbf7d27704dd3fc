//! Strata Server Binary
//!
//! Starts the HTTP API over a tiered resolution store.

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use strata::http::router;
use strata::{Config, Store};
use tracing_subscriber::{fmt, EnvFilter};

/// Strata Server
#[derive(Parser, Debug)]
#[command(name = "strata-server")]
#[command(about = "Tiered record store serving users and todos over HTTP")]
#[command(version)]
struct Args {
    /// Data directory for collection snapshots
    #[arg(short, long, default_value = "./strata_data")]
    data_dir: String,

    /// Listen address (host:port)
    #[arg(short, long, default_value = "127.0.0.1:3000")]
    listen: String,

    /// Base URL of the remote origin service
    #[arg(short, long, default_value = "https://jsonplaceholder.typicode.com")]
    origin_url: String,

    /// Origin request timeout in seconds
    #[arg(short = 't', long, default_value = "10")]
    origin_timeout_secs: u64,
}

#[tokio::main]
async fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,strata=debug"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    tracing::info!("Strata Server v{}", strata::VERSION);
    tracing::info!("Data directory: {}", args.data_dir);
    tracing::info!("Listen address: {}", args.listen);
    tracing::info!("Origin: {}", args.origin_url);

    // Build config from args
    let config = Config::builder()
        .data_dir(&args.data_dir)
        .listen_addr(&args.listen)
        .origin_base_url(&args.origin_url)
        .origin_timeout(Duration::from_secs(args.origin_timeout_secs))
        .build();

    // Open store
    let store = match Store::open(config.clone()) {
        Ok(s) => Arc::new(s),
        Err(e) => {
            tracing::error!("Failed to open store: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Store initialized successfully");

    // Bind and serve
    let listener = match tokio::net::TcpListener::bind(&config.listen_addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", config.listen_addr, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, router(store))
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Server stopped");
}

/// Resolve when Ctrl+C is received
async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("Received Ctrl+C, shutting down...");
    }
}
