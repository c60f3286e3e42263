//! API routes

use crate::server::AppState;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

type AppStateArc = Arc<AppState>;

/// Body of `POST /ask`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskRequest {
    pub text: String,
}

/// Reply of `POST /ask`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskResponse {
    pub response: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

pub fn ask_routes() -> Router<AppStateArc> {
    Router::new().route("/ask", post(ask))
}

pub fn health_routes() -> Router<AppStateArc> {
    Router::new().route("/health", get(health))
}

/// Every well-formed request gets a 200 with a reply; the chain never fails past its boundary.
async fn ask(State(state): State<AppStateArc>, Json(req): Json<AskRequest>) -> Json<AskResponse> {
    info!(text = %req.text, "API received");
    let response = state.chain.respond(&req.text);
    info!(response = %response, "API replied");
    Json(AskResponse { response })
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
