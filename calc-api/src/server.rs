//! HTTP server

use crate::config::AppConfig;
use crate::routes;
use anyhow::{Context, Result};
use axum::Router;
use handler_chain::IntentChain;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Application state shared across handlers
pub struct AppState {
    pub chain: IntentChain,
}

impl AppState {
    pub fn new(chain: IntentChain) -> Self {
        Self { chain }
    }
}

/// Router with all routes and the trace layer.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::ask_routes())
        .merge(routes::health_routes())
        .with_state(Arc::new(state))
        .layer(TraceLayer::new_for_http())
}

/// Run the HTTP server on `config.bind_addr` until the process is stopped.
pub async fn run(config: &AppConfig, state: AppState) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Bind {}", config.bind_addr))?;
    info!(addr = %config.bind_addr, "Listening on http://{}", config.bind_addr);

    axum::serve(listener, app(state)).await?;
    Ok(())
}
