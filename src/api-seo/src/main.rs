use std::sync::Arc;

use api_seo::{config, logging::setup_logging, routes, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    setup_logging("api_seo=debug,core_seo=debug,tower_http=debug");

    // Options are validated here; a missing required option aborts startup.
    let provider = Arc::new(config::provider_from_env()?);
    tracing::info!(channel = %provider.channel(), "discovery provider ready");

    let app = routes::router().with_state(AppState::new(provider));

    let addr = config::bind_addr_from_env();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on {}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
