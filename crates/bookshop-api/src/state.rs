//! Application state shared across all handlers.

use std::sync::Arc;

use bookshop_core::config::PaginationConfig;
use bookshop_database::repositories::{AuthorRepository, BookRepository};

/// Shared state threaded through every route.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Bounds applied to `page`/`limit`.
    pub pagination: PaginationConfig,
    /// Book list repository.
    pub books: Arc<BookRepository>,
    /// Author list repository.
    pub authors: Arc<AuthorRepository>,
}
