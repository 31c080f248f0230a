//! In-memory implementation of [`QueryExecutor`].
//!
//! Rows are evaluated through their serde JSON form, so any `Serialize`
//! row type works. Semantics follow the SQL the PostgreSQL executor emits:
//! clauses are joined with `AND`, a missing or `null` field never matches,
//! text operands compare against the field's text form, and `LIKE` supports
//! the `%` and `_` wildcards with no escape character.

use std::collections::HashMap;
use std::fmt;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use bookshop_core::error::AppError;
use bookshop_core::query::{BoundValue, ListQuery, PredicateClause, SqlOperator};
use bookshop_core::result::AppResult;
use bookshop_core::traits::QueryExecutor;
use bookshop_core::types::{PageResponse, PaginationParameters};

/// Executes list queries over rows held in memory.
pub struct MemoryExecutor<Row> {
    tables: HashMap<String, Vec<Row>>,
}

impl<Row> MemoryExecutor<Row> {
    /// Create an executor with no tables.
    pub fn new() -> Self {
        Self {
            tables: HashMap::new(),
        }
    }

    /// Add (or replace) a table.
    pub fn with_table(mut self, table: impl Into<String>, rows: Vec<Row>) -> Self {
        self.tables.insert(table.into(), rows);
        self
    }
}

impl<Row> Default for MemoryExecutor<Row> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Row> fmt::Debug for MemoryExecutor<Row> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryExecutor")
            .field(
                "tables",
                &self
                    .tables
                    .iter()
                    .map(|(name, rows)| (name.as_str(), rows.len()))
                    .collect::<HashMap<_, _>>(),
            )
            .finish()
    }
}

#[async_trait]
impl<Row> QueryExecutor<Row> for MemoryExecutor<Row>
where
    Row: Clone + Serialize + Send + Sync + 'static,
{
    async fn fetch_page(
        &self,
        table: &str,
        query: &ListQuery,
        page: &PaginationParameters,
    ) -> AppResult<PageResponse<Row>> {
        let rows = self
            .tables
            .get(table)
            .ok_or_else(|| AppError::database(format!("relation \"{table}\" does not exist")))?;
        let take = usize::try_from(query.take)
            .map_err(|_| AppError::database("LIMIT must not be negative"))?;
        let skip = usize::try_from(query.skip).unwrap_or(0);

        let mut matching = Vec::new();
        for row in rows {
            let value = serde_json::to_value(row)?;
            if query.clauses.iter().all(|clause| matches_clause(&value, clause)) {
                matching.push(row);
            }
        }
        debug!(table, matched = matching.len(), "Evaluated in-memory list query");

        let total = matching.len() as u64;
        let items = matching.into_iter().skip(skip).take(take).cloned().collect();
        Ok(PageResponse::new(items, page, total))
    }
}

fn matches_clause(row: &Value, clause: &PredicateClause) -> bool {
    let Some(field) = row.get(clause.field()).filter(|v| !v.is_null()) else {
        return false;
    };
    let operand = |i: usize| clause.params.get(i).map(|p| &p.value);

    match (clause.operator, operand(0)) {
        (SqlOperator::Equals, Some(BoundValue::Text(expected))) => text_of(field) == *expected,
        (SqlOperator::In, Some(BoundValue::TextList(expected))) => {
            let actual = text_of(field);
            expected.iter().any(|e| *e == actual)
        }
        (SqlOperator::Like, Some(BoundValue::Text(pattern))) => like(&text_of(field), pattern),
        (SqlOperator::Between, Some(BoundValue::Integer(from))) => {
            match (number_of(field), operand(1)) {
                (Some(n), Some(BoundValue::Integer(to))) => n >= *from as f64 && n <= *to as f64,
                _ => false,
            }
        }
        (op, Some(BoundValue::Integer(bound))) => {
            let Some(n) = number_of(field) else {
                return false;
            };
            let bound = *bound as f64;
            match op {
                SqlOperator::Equals => n == bound,
                SqlOperator::LessThan => n < bound,
                SqlOperator::LessThanOrEqual => n <= bound,
                SqlOperator::GreaterThan => n > bound,
                SqlOperator::GreaterThanOrEqual => n >= bound,
                _ => false,
            }
        }
        _ => false,
    }
}

fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Only JSON numbers order against integer bounds; text columns never do.
fn number_of(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        _ => None,
    }
}

/// SQL `LIKE`: `%` matches any run of characters, `_` exactly one.
fn like(text: &str, pattern: &str) -> bool {
    let text: Vec<char> = text.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();

    // matched[j]: pattern[..i] matches text[..j]
    let mut matched = vec![false; text.len() + 1];
    matched[0] = true;
    for p in &pattern {
        let mut next = vec![false; text.len() + 1];
        match p {
            '%' => {
                let mut any = false;
                for j in 0..=text.len() {
                    any |= matched[j];
                    next[j] = any;
                }
            }
            '_' => {
                for j in 1..=text.len() {
                    next[j] = matched[j - 1];
                }
            }
            c => {
                for j in 1..=text.len() {
                    next[j] = matched[j - 1] && text[j - 1] == *c;
                }
            }
        }
        matched = next;
    }
    matched[text.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookshop_core::query::{Combination, PredicateBuilder};
    use bookshop_core::types::FieldFilter;

    #[derive(Debug, Clone, PartialEq, Serialize)]
    struct Item {
        id: u32,
        title: String,
        price: i64,
        tag: Option<String>,
    }

    fn item(id: u32, title: &str, price: i64) -> Item {
        Item {
            id,
            title: title.to_string(),
            price,
            tag: None,
        }
    }

    fn executor() -> MemoryExecutor<Item> {
        MemoryExecutor::new().with_table(
            "items",
            vec![
                item(1, "Harry Potter", 30),
                item(2, "Harry Hole", 80),
                item(3, "The Hobbit", 40),
                item(4, "Dune", 0),
            ],
        )
    }

    async fn ids(filters: &[FieldFilter], combination: Combination) -> Vec<u32> {
        let page = PaginationParameters { page: 1, limit: 20 };
        let query = PredicateBuilder::new("item")
            .combination(combination)
            .filters(filters)
            .finish(&page);
        executor()
            .fetch_page("items", &query, &page)
            .await
            .unwrap()
            .items
            .into_iter()
            .map(|i| i.id)
            .collect()
    }

    #[test]
    fn test_like() {
        assert!(like("Harry Potter", "Harry%"));
        assert!(like("Harry Potter", "%Pot%"));
        assert!(like("Dune", "D_ne"));
        assert!(like("", ""));
        assert!(like("", "%"));
        assert!(!like("Dune", "D_n"));
        assert!(!like("Dune", "dune"));
        assert!(!like("Dune", ""));
    }

    #[tokio::test]
    async fn test_all_combination_returns_intersection() {
        let filters = [
            FieldFilter::like("title", "Harry%"),
            FieldFilter::LessThanOrEqual { field: "price".to_string(), value: 50 },
        ];
        assert_eq!(ids(&filters, Combination::All).await, vec![1]);
    }

    #[tokio::test]
    async fn test_last_wins_combination_applies_only_last_filter() {
        let filters = [
            FieldFilter::like("title", "Harry%"),
            FieldFilter::LessThanOrEqual { field: "price".to_string(), value: 50 },
        ];
        assert_eq!(ids(&filters, Combination::LastWins).await, vec![1, 3, 4]);
    }

    #[tokio::test]
    async fn test_equal_and_in() {
        assert_eq!(
            ids(&[FieldFilter::equal("title", "Dune")], Combination::All).await,
            vec![4]
        );
        let filters = [FieldFilter::Equal {
            field: "price".to_string(),
            values: vec!["30".to_string(), "40".to_string()],
        }];
        assert_eq!(ids(&filters, Combination::All).await, vec![1, 3]);
    }

    #[tokio::test]
    async fn test_between_is_inclusive() {
        let filters = [FieldFilter::Between { field: "price".to_string(), from: 30, to: 40 }];
        assert_eq!(ids(&filters, Combination::All).await, vec![1, 3]);

        let reversed = [FieldFilter::Between { field: "price".to_string(), from: 40, to: 30 }];
        assert!(ids(&reversed, Combination::All).await.is_empty());
    }

    #[tokio::test]
    async fn test_null_field_never_matches() {
        assert!(ids(&[FieldFilter::equal("tag", "null")], Combination::All).await.is_empty());
        assert!(ids(&[FieldFilter::like("missing", "%")], Combination::All).await.is_empty());
    }

    #[tokio::test]
    async fn test_numeric_bounds_never_match_text_fields() {
        let executor = MemoryExecutor::new().with_table(
            "items",
            vec![Item {
                tag: Some("5".to_string()),
                ..item(1, "10", 30)
            }],
        );
        let page = PaginationParameters { page: 1, limit: 20 };
        for filter in [
            FieldFilter::LessThan { field: "title".to_string(), value: 20 },
            FieldFilter::Between { field: "tag".to_string(), from: 0, to: 10 },
        ] {
            let query = PredicateBuilder::build(&[filter], "item", &page);
            let response = executor.fetch_page("items", &query, &page).await.unwrap();
            assert!(response.items.is_empty());
        }
    }

    #[tokio::test]
    async fn test_pagination() {
        let page = PaginationParameters { page: 2, limit: 3 };
        let query = PredicateBuilder::build(&[], "item", &page);
        let response = executor().fetch_page("items", &query, &page).await.unwrap();
        assert_eq!(response.items.iter().map(|i| i.id).collect::<Vec<_>>(), vec![4]);
        assert_eq!(response.total_items, 4);
        assert_eq!(response.total_pages, 2);
        assert!(!response.has_next);
        assert!(response.has_previous);
    }

    #[tokio::test]
    async fn test_unknown_table() {
        let page = PaginationParameters::default();
        let query = PredicateBuilder::build(&[], "x", &page);
        let err = executor().fetch_page("missing", &query, &page).await.unwrap_err();
        assert_eq!(err.kind, bookshop_core::error::ErrorKind::Database);
    }

    #[tokio::test]
    async fn test_negative_limit_is_a_database_error() {
        let page = PaginationParameters::normalize(None, Some(-2));
        let query = PredicateBuilder::build(&[], "item", &page);
        let err = executor().fetch_page("items", &query, &page).await.unwrap_err();
        assert_eq!(err.kind, bookshop_core::error::ErrorKind::Database);
    }
}
