//! # bookshop-api
//!
//! HTTP API layer for Bookshop built on Axum.
//!
//! Exposes the filtered list endpoints, the `filter`/`page`/`limit` query
//! extractor, request logging, and the mapping from [`AppError`] to HTTP
//! responses.
//!
//! [`AppError`]: bookshop_core::AppError

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::ApiError;
pub use state::AppState;
