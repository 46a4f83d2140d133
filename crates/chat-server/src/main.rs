//! kb-chat server binary

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chat_core::LlmProvider;
use chat_runtime::OllamaProvider;
use chat_server::{router, AppState, ServerConfig};

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into());
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Log whether Ollama answers and whether the configured model is installed
async fn probe_provider(provider: &dyn LlmProvider, model: &str) {
    match provider.list_models().await {
        Ok(models) => {
            tracing::info!("✓ {} reachable, {} model(s) installed", provider.name(), models.len());
            if !models.iter().any(|m| m == model || m.starts_with(&format!("{model}:"))) {
                tracing::warn!("⚠ model '{}' not found; try: ollama pull {}", model, model);
            }
        }
        Err(e) => {
            tracing::warn!("⚠ {} not available ({}); /query will answer 500", provider.name(), e);
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ServerConfig::from_env();
    let provider = Arc::new(OllamaProvider::from_env());
    tracing::info!("Ollama at {}, model {}", provider.config().base_url(), config.model);
    probe_provider(provider.as_ref(), &config.model).await;

    let state = AppState::load(provider, &config).await?;
    tracing::info!(
        chunks = state.knowledge.len(),
        path = %config.knowledge_path.display(),
        "knowledge base ready"
    );

    let app = router(state, &config.static_dir);
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    tracing::info!("kb-chat listening on http://{}", config.bind_addr);
    tracing::info!("  GET  /          chat widget");
    tracing::info!("  GET  /static/*  widget assets");
    tracing::info!("  POST /query     ask a question");
    tracing::info!("  GET  /health    health check");

    axum::serve(listener, app).await?;

    Ok(())
}
