//! Query executor seam between list-query building and storage.

use async_trait::async_trait;

use crate::query::ListQuery;
use crate::result::AppResult;
use crate::types::pagination::{PageResponse, PaginationParameters};

/// Runs a [`ListQuery`] against one named table and returns a page of rows.
///
/// Implementations join the query's clauses with `AND`, skip
/// [`ListQuery::skip`] rows and return at most [`ListQuery::take`].
/// `total_items` counts every matching row, ignoring skip/take.
#[async_trait]
pub trait QueryExecutor<Row>: Send + Sync + 'static
where
    Row: Send + Sync + 'static + serde::Serialize,
{
    /// Fetch one page of rows from `table` matching `query`.
    async fn fetch_page(
        &self,
        table: &str,
        query: &ListQuery,
        page: &PaginationParameters,
    ) -> AppResult<PageResponse<Row>>;
}
