mod config;
mod errors;
mod evaluation;
mod extractor;
mod llm_client;
mod routes;
mod similarity;
mod state;

use std::net::SocketAddr;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ATS checker API v{}", env!("CARGO_PKG_VERSION"));

    if config.openai_api_key.is_empty() {
        // Not fatal: the evaluation call will report the failure inline.
        warn!("OPENAI_API_KEY is not set; LLM calls will fail until it is provided");
    }

    let llm = LlmClient::new(
        config.openai_api_url.clone(),
        config.openai_api_key.clone(),
        config.openai_model.clone(),
    );
    info!("LLM client initialized (model: {})", llm.model());
    info!("Pass threshold: {:.2}", config.pass_threshold);

    let state = AppState::new(llm, config.clone());

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
