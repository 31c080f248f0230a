//! Translation of filters and pagination into a [`ListQuery`].

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::filter::FieldFilter;
use crate::types::pagination::PaginationParameters;

use super::clause::{BoundParameter, BoundValue, PredicateClause, SqlOperator};

/// How the clauses of a [`ListQuery`] constrain the result set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Combination {
    /// Every clause applies (`a AND b AND ...`).
    #[default]
    All,
    /// Each new clause replaces the previous one, so only the last filter
    /// constrains the result set.
    LastWins,
}

/// A declarative description of one page of a filtered list.
///
/// Executors join [`clauses`](Self::clauses) with `AND`; under
/// [`Combination::LastWins`] the builder has already reduced them to at most
/// one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    /// Alias the clause columns are qualified with.
    pub alias: String,
    /// Predicate clauses in filter order.
    pub clauses: Vec<PredicateClause>,
    /// Combination mode the clauses were built under.
    pub combination: Combination,
    /// Number of rows to skip.
    pub skip: i64,
    /// Maximum number of rows to return.
    pub take: i64,
}

impl ListQuery {
    /// Render the `WHERE` condition with named placeholders, or `None` when
    /// there are no clauses.
    pub fn where_sql(&self) -> Option<String> {
        if self.clauses.is_empty() {
            return None;
        }
        Some(
            self.clauses
                .iter()
                .map(PredicateClause::to_sql)
                .collect::<Vec<_>>()
                .join(" AND "),
        )
    }

    /// Iterate every bound parameter across all clauses.
    pub fn parameters(&self) -> impl Iterator<Item = &BoundParameter> {
        self.clauses.iter().flat_map(|c| c.params.iter())
    }
}

/// Accumulates predicate clauses for one list query.
///
/// A builder is created per query and consumed by [`finish`](Self::finish);
/// clause state is never shared between queries.
#[derive(Debug)]
pub struct PredicateBuilder {
    alias: String,
    combination: Combination,
    clauses: Vec<PredicateClause>,
    used_names: HashSet<String>,
}

impl PredicateBuilder {
    /// Create a builder whose columns are qualified with `alias`.
    pub fn new(alias: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            combination: Combination::default(),
            clauses: Vec::new(),
            used_names: HashSet::new(),
        }
    }

    /// Set the combination mode.
    pub fn combination(mut self, combination: Combination) -> Self {
        self.combination = combination;
        self
    }

    /// Translate `filters` against `alias` and paginate with `page`.
    pub fn build(filters: &[FieldFilter], alias: &str, page: &PaginationParameters) -> ListQuery {
        Self::new(alias).filters(filters).finish(page)
    }

    /// Add every filter in order.
    pub fn filters<'f>(mut self, filters: impl IntoIterator<Item = &'f FieldFilter>) -> Self {
        for filter in filters {
            self.push(filter);
        }
        self
    }

    /// Add the clause for one filter.
    pub fn push(&mut self, filter: &FieldFilter) -> &mut Self {
        let column = format!("{}.{}", self.alias, filter.field());
        let (operator, values) = match filter {
            FieldFilter::Equal { values, .. } => match values.as_slice() {
                [single] => (SqlOperator::Equals, vec![BoundValue::Text(single.clone())]),
                _ => (SqlOperator::In, vec![BoundValue::TextList(values.clone())]),
            },
            FieldFilter::LessThan { value, .. } => {
                (SqlOperator::LessThan, vec![BoundValue::Integer(*value)])
            }
            FieldFilter::LessThanOrEqual { value, .. } => {
                (SqlOperator::LessThanOrEqual, vec![BoundValue::Integer(*value)])
            }
            FieldFilter::GreaterThan { value, .. } => {
                (SqlOperator::GreaterThan, vec![BoundValue::Integer(*value)])
            }
            FieldFilter::GreaterThanOrEqual { value, .. } => (
                SqlOperator::GreaterThanOrEqual,
                vec![BoundValue::Integer(*value)],
            ),
            FieldFilter::Between { from, to, .. } => (
                SqlOperator::Between,
                vec![BoundValue::Integer(*from), BoundValue::Integer(*to)],
            ),
            FieldFilter::Like { value, .. } => {
                (SqlOperator::Like, vec![BoundValue::Text(value.clone())])
            }
        };

        let params = operator
            .parameter_suffixes()
            .iter()
            .zip(values)
            .map(|(suffix, value)| {
                let name = self.parameter_name(&column, suffix);
                BoundParameter::new(name, value)
            })
            .collect();

        let clause = PredicateClause {
            column,
            operator,
            params,
        };

        if self.combination == Combination::LastWins {
            self.clauses.clear();
        }
        self.clauses.push(clause);
        self
    }

    /// Finish the query with pagination applied.
    pub fn finish(self, page: &PaginationParameters) -> ListQuery {
        let query = ListQuery {
            alias: self.alias,
            clauses: self.clauses,
            combination: self.combination,
            skip: page.offset(),
            take: page.limit(),
        };
        debug!(
            alias = %query.alias,
            clauses = query.clauses.len(),
            combination = ?query.combination,
            skip = query.skip,
            take = query.take,
            "Built list query"
        );
        query
    }

    fn parameter_name(&mut self, column: &str, suffix: &str) -> String {
        let base = format!("{}{}", column.replace('.', "_"), suffix);
        let mut name = base.clone();
        let mut n = 2;
        while !self.used_names.insert(name.clone()) {
            name = format!("{base}{n}");
            n += 1;
        }
        name
    }
}
