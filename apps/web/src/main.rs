mod config;
mod errors;
mod llm_client;
mod reading;
mod render;
mod routes;
mod state;
mod zodiac;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::{LlmClient, OfflineGenerator, TextGenerator};
use crate::reading::generator::ReadingGenerator;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Celestial Horoscope v{}", env!("CARGO_PKG_VERSION"));

    // Initialize text generation (offline fallback when no key is set)
    let llm: Arc<dyn TextGenerator> = match &config.openai_api_key {
        Some(key) => {
            let client = LlmClient::new(
                key.clone(),
                config.openai_base_url.clone(),
                config.generation_timeout,
                config.generation_max_attempts,
            )
            .context("Failed to build HTTP client for text generation")?;
            info!(
                "LLM client initialized (model: {}, base url: {})",
                llm_client::MODEL,
                config.openai_base_url
            );
            Arc::new(client)
        }
        None => {
            warn!("OPENAI_API_KEY not set; every reading will use the fallback content");
            Arc::new(OfflineGenerator)
        }
    };

    let generator = ReadingGenerator::new(
        llm,
        config.generation_timeout,
        config.reading_validation,
    );
    info!(
        "Reading generator ready (timeout: {:?}, validation: {:?})",
        config.generation_timeout, config.reading_validation
    );

    // Build app state
    let state = AppState {
        generator,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
