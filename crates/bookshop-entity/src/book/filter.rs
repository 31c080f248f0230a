//! List filtering for books.

use bookshop_core::types::{FieldFilterWhitelist, FilterOp};

/// Table holding book rows.
pub const TABLE: &str = "books";
/// Alias list queries qualify book columns with.
pub const ALIAS: &str = "book";

/// Declared PostgreSQL types of the filterable columns.
pub const COLUMN_TYPES: &[(&str, &str)] = &[
    ("title", "text"),
    ("author_id", "uuid"),
    ("price", "bigint"),
    ("stock", "integer"),
    ("published_year", "integer"),
];

/// Fields and operators `GET /api/books` accepts in its `filter` parameter.
pub fn whitelist() -> FieldFilterWhitelist {
    use FilterOp::*;

    FieldFilterWhitelist::new()
        .allow("title", [Eq, Like])
        .allow("author_id", [Eq])
        .allow("price", [Eq, Lt, Lte, Gt, Gte, Between])
        .allow("stock", [Lt, Lte, Gt, Gte])
        .allow("published_year", [Eq, Between, Gte, Lte])
}
