//! PostgreSQL implementation of [`QueryExecutor`].

use std::collections::HashMap;

use async_trait::async_trait;
use serde::Serialize;
use sqlx::FromRow;
use sqlx::postgres::{PgPool, PgRow};
use tracing::debug;

use bookshop_core::error::{AppError, ErrorKind};
use bookshop_core::query::ListQuery;
use bookshop_core::result::AppResult;
use bookshop_core::traits::QueryExecutor;
use bookshop_core::types::{PageResponse, PaginationParameters};

use crate::sql::ColumnTypes;

/// SQLSTATE codes raised when a bound value cannot be cast to its column's
/// type (`invalid_text_representation`, `numeric_value_out_of_range`).
const BAD_OPERAND_CODES: [&str; 2] = ["22P02", "22003"];

/// Runs list queries against a PostgreSQL pool.
#[derive(Debug, Clone)]
pub struct PgQueryExecutor {
    pool: PgPool,
    columns: HashMap<String, ColumnTypes>,
}

impl PgQueryExecutor {
    /// Create an executor on `pool`.
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            columns: HashMap::new(),
        }
    }

    /// Register the declared column types of `table`.
    pub fn with_columns(mut self, table: &str, columns: &[(&'static str, &'static str)]) -> Self {
        self.columns.insert(table.to_string(), ColumnTypes::new(columns));
        self
    }

    fn columns(&self, table: &str) -> ColumnTypes {
        self.columns.get(table).cloned().unwrap_or_default()
    }
}

fn map_query_error(table: &str, action: &str, err: sqlx::Error) -> AppError {
    let bad_operand = err
        .as_database_error()
        .and_then(|db| db.code())
        .is_some_and(|code| BAD_OPERAND_CODES.contains(&code.as_ref()));
    if bad_operand {
        AppError::with_source(
            ErrorKind::Validation,
            format!("Filter value does not fit a column of {table}"),
            err,
        )
    } else {
        AppError::with_source(ErrorKind::Database, format!("Failed to {action} {table}"), err)
    }
}

#[async_trait]
impl<Row> QueryExecutor<Row> for PgQueryExecutor
where
    Row: for<'r> FromRow<'r, PgRow> + Serialize + Send + Sync + Unpin + 'static,
{
    async fn fetch_page(
        &self,
        table: &str,
        query: &ListQuery,
        page: &PaginationParameters,
    ) -> AppResult<PageResponse<Row>> {
        let columns = self.columns(table);

        let mut count = crate::sql::render_count(table, query, &columns);
        debug!(table, sql = count.sql(), "Counting rows");
        let total: i64 = count
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_query_error(table, "count", e))?;

        let mut select = crate::sql::render_select(table, query, &columns);
        debug!(table, sql = select.sql(), "Fetching rows");
        let rows = select
            .build_query_as::<Row>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_query_error(table, "list", e))?;

        Ok(PageResponse::new(
            rows,
            page,
            u64::try_from(total).unwrap_or(0),
        ))
    }
}
