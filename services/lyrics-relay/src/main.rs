// Lyrics relay service
use std::sync::Arc;

use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::CONFIG_MANAGER;
mod config;
mod controllers;
mod error;
mod models;
mod routers;
use controllers::LyricsController;
use routers::lyrics_routes;

fn init_logging() -> anyhow::Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy()
        .add_directive("reqwest=warn".parse()?)
        .add_directive("hyper=warn".parse()?);

    fmt().with_env_filter(filter).with_target(false).init();
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging()?;

    let address = format!(
        "{}:{}",
        CONFIG_MANAGER.get("BIND_ADDRESS"),
        CONFIG_MANAGER.get("PORT")
    );
    let provider = CONFIG_MANAGER.get("LRCLIB_URL");
    let listener = tokio::net::TcpListener::bind(&address).await?;

    let controller = Arc::new(LyricsController::new());
    let app = lyrics_routes(controller).layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));

    info!("🎤 Lyrics relay listening on {}", listener.local_addr()?);
    info!("📡 Provider: {}/api/get", provider);

    axum::serve(listener, app).await?;
    Ok(())
}
