//! # calc-api
//!
//! HTTP surface for the arithmetic responder (`POST /ask`, `GET /health`) and the client side used
//! by the chat front end. Config is loaded from env.

pub mod chat;
pub mod client;
pub mod config;
pub mod routes;
pub mod server;

pub use chat::{ChatSession, Role, TranscriptEntry, API_FAILURE};
pub use client::{AskClient, MISSING_RESPONSE};
pub use config::AppConfig;
pub use routes::{AskRequest, AskResponse, HealthResponse};
pub use server::{app, run, AppState};
