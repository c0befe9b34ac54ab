//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod health;
pub mod items;
pub mod publish;
pub mod sessions;
pub mod summary;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(sessions::routes())
        .merge(items::routes())
        .merge(summary::routes())
        .merge(publish::routes())
}
