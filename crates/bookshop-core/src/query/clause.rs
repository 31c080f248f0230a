//! Parameterized predicate clauses.

use std::fmt;

use serde::{Deserialize, Serialize};

/// SQL comparison emitted by a clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SqlOperator {
    /// `column = :p`
    Equals,
    /// `column IN (:...p)`
    In,
    /// `column < :p`
    LessThan,
    /// `column <= :p`
    LessThanOrEqual,
    /// `column > :p`
    GreaterThan,
    /// `column >= :p`
    GreaterThanOrEqual,
    /// `column BETWEEN :p1 AND :p2`
    Between,
    /// `column LIKE :p`
    Like,
}

impl SqlOperator {
    /// Return the SQL keyword or symbol for this operator.
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Equals => "=",
            Self::In => "IN",
            Self::LessThan => "<",
            Self::LessThanOrEqual => "<=",
            Self::GreaterThan => ">",
            Self::GreaterThanOrEqual => ">=",
            Self::Between => "BETWEEN",
            Self::Like => "LIKE",
        }
    }

    /// Suffixes appended to the column name to form parameter names.
    pub(crate) fn parameter_suffixes(&self) -> &'static [&'static str] {
        match self {
            Self::Equals => &["EqualsParameter"],
            Self::In => &["InParameter"],
            Self::LessThan => &["LessThanParameter"],
            Self::LessThanOrEqual => &["LessThanOrEqualParameter"],
            Self::GreaterThan => &["GreaterThanParameter"],
            Self::GreaterThanOrEqual => &["GreaterThanOrEqualParameter"],
            Self::Between => &["BetweenFromParameter", "BetweenToParameter"],
            Self::Like => &["LikeParameter"],
        }
    }
}

impl fmt::Display for SqlOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

/// A value bound to a clause parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BoundValue {
    /// A text value (`=`, `LIKE`).
    Text(String),
    /// An integer value (ordering comparisons, `BETWEEN`).
    Integer(i64),
    /// A list of text values (`IN`).
    TextList(Vec<String>),
}

/// A named parameter and its value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundParameter {
    /// Parameter name, unique within one [`ListQuery`](super::ListQuery).
    pub name: String,
    /// The bound value.
    pub value: BoundValue,
}

impl BoundParameter {
    /// Create a named parameter.
    pub fn new(name: impl Into<String>, value: BoundValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// One parameterized comparison destined for a `WHERE` condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredicateClause {
    /// Qualified column, `<alias>.<field>`.
    pub column: String,
    /// Comparison operator.
    pub operator: SqlOperator,
    /// Bound parameters in placeholder order. `BETWEEN` has two.
    pub params: Vec<BoundParameter>,
}

impl PredicateClause {
    /// The field part of [`column`](Self::column), without the alias.
    pub fn field(&self) -> &str {
        self.column
            .split_once('.')
            .map_or(self.column.as_str(), |(_, field)| field)
    }

    /// Render the clause with named `:placeholders`.
    pub fn to_sql(&self) -> String {
        let name = |i: usize| self.params.get(i).map_or("", |p| p.name.as_str());
        match self.operator {
            SqlOperator::In => format!("{} IN (:...{})", self.column, name(0)),
            SqlOperator::Between => format!(
                "{} BETWEEN :{} AND :{}",
                self.column,
                name(0),
                name(1)
            ),
            op => format!("{} {} :{}", self.column, op.as_sql(), name(0)),
        }
    }
}

impl fmt::Display for PredicateClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql())
    }
}
