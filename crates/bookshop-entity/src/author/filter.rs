//! List filtering for authors.

use bookshop_core::types::{FieldFilterWhitelist, FilterOp};

/// Table holding author rows.
pub const TABLE: &str = "authors";
/// Alias list queries qualify author columns with.
pub const ALIAS: &str = "author";

/// Declared PostgreSQL types of the filterable columns.
pub const COLUMN_TYPES: &[(&str, &str)] = &[("name", "text"), ("country", "text")];

/// Fields and operators `GET /api/authors` accepts in its `filter` parameter.
pub fn whitelist() -> FieldFilterWhitelist {
    FieldFilterWhitelist::new()
        .allow("name", [FilterOp::Eq, FilterOp::Like])
        .allow("country", [FilterOp::Eq])
}
