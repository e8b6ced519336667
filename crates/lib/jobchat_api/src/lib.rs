//! # jobchat_api
//!
//! HTTP API library for jobchat: a single `POST /chat` relay to an
//! LLM completion API, plus `GET /health`.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use jobchat_core::completion::{CompletionClient, UpstreamError};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};

use crate::config::ApiConfig;
use crate::handlers::{chat, health, panic};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// API configuration, read-only after startup.
    pub config: Arc<ApiConfig>,
    /// Pooled client for the completion API.
    pub client: CompletionClient,
}

impl AppState {
    /// Builds state from config, creating the completion client with the
    /// configured timeout.
    pub fn new(config: ApiConfig) -> Result<Self, UpstreamError> {
        let client = CompletionClient::new(config.completion.request_timeout)?;
        Ok(Self {
            config: Arc::new(config),
            client,
        })
    }
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/chat", post(chat::chat_handler))
        .route("/health", get(health::health_handler))
        .layer(CatchPanicLayer::custom(panic::panic_response))
        .layer(cors)
        .with_state(state)
}
