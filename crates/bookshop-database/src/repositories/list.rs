//! Generic filtered list repository.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use bookshop_core::error::AppError;
use bookshop_core::parser::FilterParser;
use bookshop_core::query::{Combination, ListQuery, PredicateBuilder};
use bookshop_core::result::AppResult;
use bookshop_core::traits::QueryExecutor;
use bookshop_core::types::{FieldFilterWhitelist, PageResponse, PaginationParameters};

/// Lists rows of one table through a `filter` expression and pagination.
///
/// Owns the whitelist for its endpoint; filters it does not allow are
/// dropped, malformed ones fail with `InvalidFilterSyntax`.
pub struct ListRepository<Row> {
    executor: Arc<dyn QueryExecutor<Row>>,
    table: &'static str,
    alias: &'static str,
    whitelist: FieldFilterWhitelist,
    combination: Combination,
}

impl<Row> ListRepository<Row>
where
    Row: Serialize + Send + Sync + 'static,
{
    /// Create a repository over `table`, qualifying columns with `alias`.
    pub fn new(
        executor: Arc<dyn QueryExecutor<Row>>,
        table: &'static str,
        alias: &'static str,
        whitelist: FieldFilterWhitelist,
    ) -> Self {
        Self {
            executor,
            table,
            alias,
            whitelist,
            combination: Combination::default(),
        }
    }

    /// Set how multiple filters combine.
    pub fn with_combination(mut self, combination: Combination) -> Self {
        self.combination = combination;
        self
    }

    /// The whitelist this repository parses filters against.
    pub fn whitelist(&self) -> &FieldFilterWhitelist {
        &self.whitelist
    }

    /// Parse `raw_filter` and build the query for `page`.
    pub fn list_query(&self, raw_filter: Option<&str>, page: &PaginationParameters) -> AppResult<ListQuery> {
        let filters = FilterParser::new(&self.whitelist).parse_optional(raw_filter)?;
        Ok(PredicateBuilder::new(self.alias)
            .combination(self.combination)
            .filters(&filters)
            .finish(page))
    }

    /// Fetch one page of rows matching `raw_filter`.
    ///
    /// A negative limit survives normalization but is refused here with a
    /// validation error rather than reaching the database.
    pub async fn list(&self, raw_filter: Option<&str>, page: &PaginationParameters) -> AppResult<PageResponse<Row>> {
        let query = self.list_query(raw_filter, page)?;
        if query.take < 0 {
            return Err(AppError::validation(format!(
                "limit must not be negative, got {}",
                query.take
            )));
        }
        self.executor.fetch_page(self.table, &query, page).await
    }
}

impl<Row> fmt::Debug for ListRepository<Row> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListRepository")
            .field("table", &self.table)
            .field("alias", &self.alias)
            .field("whitelist", &self.whitelist)
            .field("combination", &self.combination)
            .finish_non_exhaustive()
    }
}
