//! Techno Track Name Generator
//!
//! A conversational service that walks a user through choosing a naming
//! mode and style, then asks an LLM for techno track names.

mod api;
mod config;
mod dialogue;
mod llm;
mod naming;
mod runtime;

use api::{create_router, AppState};
use config::Config;
use llm::{LlmService, LoggingService, OpenRouterService};
use naming::NamingEngine;
use runtime::InMemoryStateStore;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is fine; the real environment still applies
    let dotenv_loaded = dotenvy::dotenv().is_ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "track_namer=info,tower_http=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false),
        )
        .init();

    if dotenv_loaded {
        tracing::debug!("Loaded environment from .env");
    }

    // Configuration
    let config = Config::from_env().inspect_err(|e| {
        tracing::error!(error = %e, "Invalid configuration");
    })?;
    tracing::info!(openrouter = ?config.openrouter, port = config.port, "Configuration loaded");

    // Initialize LLM client
    let timeout = config.generation_timeout();
    let openrouter: Arc<dyn LlmService> = Arc::new(OpenRouterService::new(config.openrouter)?);
    let llm: Arc<dyn LlmService> = Arc::new(LoggingService::new(openrouter));
    tracing::info!(model = %llm.model_id(), "LLM client initialized");

    let engine = NamingEngine::new(llm).with_timeout(timeout);

    // Create application state
    let state = AppState::new(Arc::new(InMemoryStateStore::new()), engine);

    // Create router
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = create_router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Track name generator listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
