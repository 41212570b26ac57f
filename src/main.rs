use std::sync::Arc;

use clap::Parser;
use tokio::signal;
use tracing::info;
use tracing_subscriber::EnvFilter;

use doghouse::config::DogHouseConfig;
use doghouse::dogs::{DogService, InMemoryDogRepository};
use doghouse::http::{app_router, AdmissionState, HttpServer};
use doghouse::ratelimit::{Clock, LimiterRegistry, SystemClock};

#[derive(Parser, Debug)]
#[command(name = "doghouse", about = "Dog record service", version)]
struct Cli {
    /// Path to a YAML configuration file
    #[arg(long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    info!("Starting DogHouse Service");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    let config = match cli.config.as_deref() {
        Some(path) => DogHouseConfig::from_file(path)?,
        None => DogHouseConfig::default(),
    };
    config.validate()?;
    info!(
        listen_addr = %config.server.listen_addr,
        requests_per_window = config.rate_limiting.requests_per_window,
        window_ms = config.rate_limiting.window_ms,
        "Configuration loaded"
    );

    // A misconfigured limiter fails here, before any traffic is accepted.
    let registry = Arc::new(LimiterRegistry::new(
        config.rate_limiting.requests_per_window,
        config.rate_limiting.window(),
    )?);

    // Startup clock probe; clock problems are fatal here, never per-request.
    let clock = Arc::new(SystemClock::new());
    info!(now_ms = clock.now_millis(), "Clock initialized");

    let repository = Arc::new(InMemoryDogRepository::seeded());
    let dogs = Arc::new(DogService::new(repository));
    let admission = AdmissionState::new(registry, clock);

    let server = HttpServer::new(config.server.listen_addr, app_router(dogs, admission));
    server.serve_with_shutdown(shutdown_signal()).await?;

    info!("DogHouse Service stopped");
    Ok(())
}

/// Wait for a shutdown signal (Ctrl+C or SIGTERM).
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
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
