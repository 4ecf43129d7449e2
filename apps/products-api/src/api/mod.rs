//! API routes module

pub mod products;
pub mod root;

use axum::Router;
use axum_helpers::server::health_router;

use crate::state::AppState;

/// Routes nested under `/api` (authenticated)
pub fn routes(state: &AppState) -> Router {
    Router::new().nest("/products", products::router(state))
}

/// Routes served at the root without authentication
pub fn public_routes(state: &AppState) -> Router {
    Router::new()
        .merge(root::router())
        .merge(health_router(state.config.app))
}
