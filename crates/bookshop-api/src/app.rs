//! Application builder: wires repositories and router into an Axum app.

use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use bookshop_core::config::AppConfig;
use bookshop_core::error::AppError;
use bookshop_database::PgQueryExecutor;
use bookshop_entity::{author, book};
use bookshop_database::repositories::{AuthorRepository, BookRepository};

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Runs the Bookshop server with the given configuration and database pool.
pub async fn run_server(config: AppConfig, db_pool: PgPool) -> Result<(), AppError> {
    tracing::info!("Starting Bookshop server...");

    let executor = Arc::new(
        PgQueryExecutor::new(db_pool)
            .with_columns(book::TABLE, book::COLUMN_TYPES)
            .with_columns(author::TABLE, author::COLUMN_TYPES),
    );
    let combination = config.filtering.combination;
    tracing::info!(combination = ?combination, "Filter combination mode");

    let app_state = AppState {
        pagination: config.pagination,
        books: Arc::new(BookRepository::books(executor.clone()).with_combination(combination)),
        authors: Arc::new(AuthorRepository::authors(executor).with_combination(combination)),
    };

    let app = build_app(app_state);
    let addr = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Bookshop server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("Bookshop server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
