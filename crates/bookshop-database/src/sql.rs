//! Rendering of [`ListQuery`] values into PostgreSQL statements.
//!
//! Identifiers are double-quoted and every value is bound positionally
//! (`$1`, `$2`, ...). Clauses are joined with `AND`.
//!
//! Text operands (`=`, `IN`) are cast to the column's declared type when it
//! is registered in [`ColumnTypes`], so the comparison stays indexable.
//! `LIKE` on a non-text column and any unregistered column fall back to
//! comparing `CAST(column AS TEXT)`.

use std::collections::HashMap;

use sqlx::{Postgres, QueryBuilder};

use bookshop_core::query::{BoundParameter, BoundValue, ListQuery, PredicateClause, SqlOperator};

/// Quote a single SQL identifier.
pub fn quote_identifier(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

/// Quote a possibly alias-qualified column (`alias.field`).
pub fn quote_column(column: &str) -> String {
    column
        .split('.')
        .map(quote_identifier)
        .collect::<Vec<_>>()
        .join(".")
}

/// Declared PostgreSQL types of one table's filterable columns.
#[derive(Debug, Clone, Default)]
pub struct ColumnTypes {
    types: HashMap<&'static str, &'static str>,
}

impl ColumnTypes {
    /// Build from `(field, sql_type)` pairs such as `("author_id", "uuid")`.
    pub fn new(columns: &[(&'static str, &'static str)]) -> Self {
        Self {
            types: columns.iter().copied().collect(),
        }
    }

    /// The declared type of `field`, if registered.
    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.types.get(field).copied()
    }
}

/// Build `SELECT alias.* FROM table AS alias WHERE ... LIMIT take OFFSET skip`.
pub fn render_select(
    table: &str,
    query: &ListQuery,
    columns: &ColumnTypes,
) -> QueryBuilder<'static, Postgres> {
    let alias = quote_identifier(&query.alias);
    let mut builder = QueryBuilder::new(format!(
        "SELECT {alias}.* FROM {} AS {alias}",
        quote_identifier(table)
    ));
    push_where(&mut builder, query, columns);
    builder.push(" LIMIT ");
    builder.push_bind(query.take);
    builder.push(" OFFSET ");
    builder.push_bind(query.skip);
    builder
}

/// Build `SELECT COUNT(*) FROM table AS alias WHERE ...`.
pub fn render_count(
    table: &str,
    query: &ListQuery,
    columns: &ColumnTypes,
) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(format!(
        "SELECT COUNT(*) FROM {} AS {}",
        quote_identifier(table),
        quote_identifier(&query.alias)
    ));
    push_where(&mut builder, query, columns);
    builder
}

fn push_where(builder: &mut QueryBuilder<'static, Postgres>, query: &ListQuery, columns: &ColumnTypes) {
    for (i, clause) in query.clauses.iter().enumerate() {
        builder.push(if i == 0 { " WHERE " } else { " AND " });
        push_clause(builder, clause, columns);
    }
}

/// How a text operand meets its column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TextComparison {
    /// Column and operand are both text.
    Direct,
    /// The operand is cast to the column's type.
    CastOperand(&'static str),
    /// The column is cast to text.
    CastColumn,
}

fn text_comparison(clause: &PredicateClause, columns: &ColumnTypes) -> TextComparison {
    match columns.get(clause.field()) {
        Some(ty) if ty.eq_ignore_ascii_case("text") => TextComparison::Direct,
        Some(ty) if clause.operator != SqlOperator::Like => TextComparison::CastOperand(ty),
        _ => TextComparison::CastColumn,
    }
}

fn push_clause(builder: &mut QueryBuilder<'static, Postgres>, clause: &PredicateClause, columns: &ColumnTypes) {
    let textual = clause
        .params
        .iter()
        .any(|p| !matches!(p.value, BoundValue::Integer(_)));
    let comparison = if textual {
        text_comparison(clause, columns)
    } else {
        TextComparison::Direct
    };

    let column = quote_column(&clause.column);
    if comparison == TextComparison::CastColumn {
        builder.push(format!("CAST({column} AS TEXT)"));
    } else {
        builder.push(column);
    }

    let cast = match comparison {
        TextComparison::CastOperand(ty) => Some(ty),
        _ => None,
    };
    let first = clause.params.first();
    match clause.operator {
        SqlOperator::Between => {
            builder.push(" BETWEEN ");
            push_value(builder, first, cast);
            builder.push(" AND ");
            push_value(builder, clause.params.get(1), cast);
        }
        op => {
            builder.push(format!(" {} ", op.as_sql()));
            push_value(builder, first, cast);
        }
    }
}

fn push_value(
    builder: &mut QueryBuilder<'static, Postgres>,
    param: Option<&BoundParameter>,
    cast: Option<&'static str>,
) {
    match param.map(|p| &p.value) {
        Some(BoundValue::Text(value)) => push_text(builder, value.clone(), cast),
        Some(BoundValue::Integer(value)) => {
            builder.push_bind(*value);
        }
        Some(BoundValue::TextList(values)) => {
            builder.push("(");
            for (i, value) in values.iter().enumerate() {
                if i > 0 {
                    builder.push(", ");
                }
                push_text(builder, value.clone(), cast);
            }
            builder.push(")");
        }
        None => {
            builder.push("NULL");
        }
    }
}

fn push_text(builder: &mut QueryBuilder<'static, Postgres>, value: String, cast: Option<&'static str>) {
    match cast {
        Some(ty) => {
            builder.push("CAST(");
            builder.push_bind(value);
            builder.push(format!(" AS {ty})"));
        }
        None => {
            builder.push_bind(value);
        }
    }
}
