//! Author repository.

use std::sync::Arc;

use bookshop_core::traits::QueryExecutor;
use bookshop_entity::author::{self, Author};

use super::list::ListRepository;

/// Repository listing rows of the `authors` table.
pub type AuthorRepository = ListRepository<Author>;

impl ListRepository<Author> {
    /// Create the author repository.
    pub fn authors(executor: Arc<dyn QueryExecutor<Author>>) -> Self {
        Self::new(executor, author::TABLE, author::ALIAS, author::whitelist())
    }
}
