use std::sync::Arc;

use ai_dashboard_backend::{config::Config, observability, routes, state::AppState};
use tower_http::cors::CorsLayer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    observability::init_tracing();

    let config = Config::from_env()?;
    tracing::debug!(?config, "loaded configuration");

    if config.gemini_api_key.is_none() {
        tracing::warn!("GEMINI_API_KEY is not set; conversation and code requests will fail");
    }
    if config.google_api_key.is_none() {
        tracing::warn!("GOOGLE_API_KEY is not set; video descriptions will fail");
    }
    if config.replicate_api_key.is_none() {
        tracing::warn!("REPLICATE_API_KEY is not set; music requests will fail");
    }

    let state = Arc::new(AppState::from_config(&config)?);

    let app = routes::create_router()
        .with_state(state)
        .layer(CorsLayer::very_permissive());

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("AI dashboard backend listening on {}", config.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
