//! Route definitions for the Bookshop HTTP API.
//!
//! All routes are mounted under `/api`.

use axum::{Router, middleware as axum_middleware, routing::get};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(catalogue_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Filtered list endpoints
fn catalogue_routes() -> Router<AppState> {
    Router::new()
        .route("/books", get(handlers::books::list_books))
        .route("/authors", get(handlers::authors::list_authors))
}

fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
