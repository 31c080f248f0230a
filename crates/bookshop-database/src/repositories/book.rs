//! Book repository.

use std::sync::Arc;

use bookshop_core::traits::QueryExecutor;
use bookshop_entity::book::{self, Book};

use super::list::ListRepository;

/// Repository listing rows of the `books` table.
pub type BookRepository = ListRepository<Book>;

impl ListRepository<Book> {
    /// Create the book repository.
    pub fn books(executor: Arc<dyn QueryExecutor<Book>>) -> Self {
        Self::new(executor, book::TABLE, book::ALIAS, book::whitelist())
    }
}
