//! Predicate building for filtered list queries.
//!
//! [`PredicateBuilder`] turns validated [`FieldFilter`](crate::types::FieldFilter)s
//! and [`PaginationParameters`](crate::types::PaginationParameters) into a
//! [`ListQuery`]: parameterized clauses plus skip/take values that a
//! [`QueryExecutor`](crate::traits::QueryExecutor) runs against one table.

pub mod builder;
pub mod clause;

pub use builder::{Combination, ListQuery, PredicateBuilder};
pub use clause::{BoundParameter, BoundValue, PredicateClause, SqlOperator};
