/*
 * Responsibility
 * - tracing init → Config 読み込み → Router 組み立て
 * - static assets are the Router fallback (ServeDir)
 * - axum::serve() で起動
 */
use anyhow::Result;
use axum::Router;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{api, config::Config, state::AppState};

fn init_tracing() {
    // Prefer RUST_LOG if set; otherwise use a sensible default.
    // Ex:
    // RUST_LOG=info,token_inspector=debug,tower_http=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

pub async fn run() -> Result<()> {
    init_tracing();

    let config = Config::from_env()?;
    let state = AppState::new();

    tracing::info!("token inspector listening on {}", config.addr);

    let app = build_router(state, &config.assets_dir);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(state: AppState, assets_dir: &str) -> Router {
    Router::new()
        .merge(api::routes())
        .fallback_service(ServeDir::new(assets_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
