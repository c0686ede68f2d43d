//! Token filter dashboard server
//!
//! Run with: cargo run -p tokenfilter-web

use tokenfilter_common::DashboardConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")),
        )
        .init();

    info!("Starting token filter dashboard...");

    let config = DashboardConfig::load()?;
    let addr = config.server.bind_address();
    info!(provider = ?config.provider.kind, limit = config.provider.limit, "configuration loaded");

    let state = tokenfilter_web::state::AppState::from_config(config)?;
    let app = tokenfilter_web::router::build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("🚀 Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
