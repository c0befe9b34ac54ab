//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST routes driving one budgeting session per client
//! - JSON error responses
//! - Shared application state

pub mod error;
pub mod extract;
pub mod routes;

use axum::Router;
use orcamento_core::session::SessionStore;
use orcamento_shared::AppConfig;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::ApiError;
pub use extract::{ApiJson, ApiPath, FormValue};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Live budgeting sessions.
    pub sessions: SessionStore,
    /// Loaded configuration.
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Builds state with a session store sized from the configuration.
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        Self {
            sessions: SessionStore::from_config(&config.session),
            config: Arc::new(config),
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
