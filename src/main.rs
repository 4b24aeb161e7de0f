use anyhow::Context;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tracing_subscriber::EnvFilter;

use mergington::config::AppConfig;
use mergington::database::registry::ActivityRegistry;
use mergington::database::seed;
use mergington::web;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // 1. Start logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env();

    // 2. Seed the registry
    let activities = match &config.seed_path {
        Some(path) => seed::load_file(path)?,
        None => seed::load_embedded()?,
    };
    tracing::info!(
        activities = activities.len(),
        seed = ?config.seed_path,
        "activity registry seeded"
    );
    let registry = ActivityRegistry::new(activities);

    // 3. Build the app
    let app = web::router(registry, &config.static_dir);

    // 4. Start the server (with fallback port)
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .with_context(|| format!("invalid host/port {}:{}", config.host, config.port))?;

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = SocketAddr::new(addr.ip(), config.port.saturating_add(1));
            tracing::warn!("Could not bind {}: {}. Trying fallback {}", addr, e, fallback);
            tokio::net::TcpListener::bind(fallback)
                .await
                .with_context(|| format!("could not bind fallback {}", fallback))?
        }
    };

    let bound_addr = listener.local_addr()?;
    tracing::info!("Server running on http://{}", bound_addr);

    axum::serve(listener, app).await.context("server error")
}
