mod assets;
mod chat;
mod config;
mod contact;
mod errors;
mod extract;
mod llm_client;
mod middleware;
mod models;
mod resume;
mod routes;
mod state;
#[cfg(test)]
mod test_support;
mod validation;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::assets::build_asset_router;
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_app;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={},tower_http=info",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Portfolio API v{}", env!("CARGO_PKG_VERSION"));

    if config.groq_api_key.is_none() {
        warn!("GROQ_API_KEY is not set; /api/chat will answer with a configuration error");
    }

    let llm = LlmClient::new(config.completion_api_url.clone());
    info!(
        "LLM client initialized (model: {}, endpoint: {})",
        llm_client::MODEL,
        llm.endpoint()
    );

    // Resolved once; a missing client template or build directory stops startup here.
    let assets = build_asset_router(config.asset_mode, &config.client_dir, &config.dist_dir)
        .context("Failed to set up asset serving")?;

    let state = AppState {
        llm: Arc::new(llm),
        config: config.clone(),
    };
    let app = build_app(state, assets);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("serving on {addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
