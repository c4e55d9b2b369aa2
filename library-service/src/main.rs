//! Library Catalog Service
//!
//! Catalog of books and authors kept in memory. Loads configuration,
//! installs tracing, builds the catalog store and the use-case layer the
//! RPC and HTTP gateway front-ends call into, then runs until SIGINT or
//! SIGTERM.

use tracing::{error, info};

use library_service::{
    config::AppConfig, create_library_service, error::AppResult, tracing::tracer::Tracer,
};

#[tokio::main]
async fn main() -> AppResult<()> {
    let config = AppConfig::load()?;

    Tracer::install(&config)?;

    info!(
        "Starting {} v{}",
        config.distribution.name,
        config.distribution.version.as_deref().unwrap_or("unknown"),
    );

    if let Err(err) = start(&config).await {
        error!("library service failed: {}", err);
        return Err(err);
    }

    Ok(())
}

async fn start(config: &AppConfig) -> AppResult<()> {
    let _library_service = create_library_service();

    info!(
        grpc_address = %config.server.grpc_address(),
        gateway_address = %config.server.gateway_address(),
        "Library service ready"
    );

    shutdown_signal().await?;

    info!("Shutting down");
    tokio::time::sleep(config.server.shutdown_grace()).await;

    Ok(())
}

#[cfg(unix)]
async fn shutdown_signal() -> AppResult<()> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut terminate = signal(SignalKind::terminate())?;
    tokio::select! {
        result = tokio::signal::ctrl_c() => result?,
        _ = terminate.recv() => {}
    }
    Ok(())
}

#[cfg(not(unix))]
async fn shutdown_signal() -> AppResult<()> {
    tokio::signal::ctrl_c().await?;
    Ok(())
}
