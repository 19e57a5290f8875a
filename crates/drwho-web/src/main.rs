mod answer;
mod config;
mod error;
mod profile;
mod render;
mod table;
mod views;

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use drwho_common::backend::{BackendClient, BackendClientConfig};

use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("starting drwho web front end");

    // 1. Load config from environment
    let config = Config::from_env()?;

    // 2. Build the backend API client
    let backend_config = BackendClientConfig::from_env();
    info!(
        base_url = %backend_config.base_url,
        timeout_ms = backend_config.timeout.as_millis(),
        "backend client configured"
    );
    let backend = Arc::new(BackendClient::new(backend_config)?);

    // 3. Assemble routes and serve
    let app = views::router(backend);
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!(addr = %config.bind_addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
