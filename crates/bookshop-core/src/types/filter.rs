//! Filter types for dynamic list queries.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Filter comparison operator.
///
/// The serialized form is the wire literal used inside `filter` expressions
/// (`eq`, `lt`, `lte`, `gt`, `gte`, `between`, `like`). Literals are
/// case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterOp {
    /// Equality against one or more literal values.
    Eq,
    /// Less than.
    Lt,
    /// Less than or equal.
    Lte,
    /// Greater than.
    Gt,
    /// Greater than or equal.
    Gte,
    /// Inclusive numeric range.
    Between,
    /// SQL `LIKE` pattern match.
    Like,
}

impl FilterOp {
    /// Every operator, in declaration order.
    pub const ALL: [FilterOp; 7] = [
        FilterOp::Eq,
        FilterOp::Lt,
        FilterOp::Lte,
        FilterOp::Gt,
        FilterOp::Gte,
        FilterOp::Between,
        FilterOp::Like,
    ];

    /// Return the wire literal for this operator.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Eq => "eq",
            Self::Lt => "lt",
            Self::Lte => "lte",
            Self::Gt => "gt",
            Self::Gte => "gte",
            Self::Between => "between",
            Self::Like => "like",
        }
    }

    /// Look up an operator by its wire literal.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.as_str() == symbol)
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for FilterOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterOp {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s).ok_or_else(|| UnknownOperator(s.to_string()))
    }
}

/// An operator literal outside the closed set was supplied where a
/// [`FilterOp`] was required.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown filter operator '{0}'")]
pub struct UnknownOperator(pub String);

/// A fixed-size set of [`FilterOp`] values.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OperatorSet(u8);

impl OperatorSet {
    /// The empty set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// The set containing every operator.
    pub fn all() -> Self {
        FilterOp::ALL.into_iter().collect()
    }

    /// Return a copy of this set with `op` added.
    pub fn with(mut self, op: FilterOp) -> Self {
        self.insert(op);
        self
    }

    /// Add an operator to the set.
    pub fn insert(&mut self, op: FilterOp) {
        self.0 |= op.bit();
    }

    /// Whether the set contains `op`.
    pub fn contains(&self, op: FilterOp) -> bool {
        self.0 & op.bit() != 0
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Number of operators in the set.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterate the operators in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = FilterOp> + '_ {
        FilterOp::ALL.into_iter().filter(|op| self.contains(*op))
    }
}

impl fmt::Debug for OperatorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<FilterOp> for OperatorSet {
    fn from_iter<I: IntoIterator<Item = FilterOp>>(iter: I) -> Self {
        let mut set = Self::empty();
        for op in iter {
            set.insert(op);
        }
        set
    }
}

impl From<&[FilterOp]> for OperatorSet {
    fn from(ops: &[FilterOp]) -> Self {
        ops.iter().copied().collect()
    }
}

/// A single validated filter condition on a named field.
///
/// Numeric variants always carry a successfully parsed integer; `Equal`
/// always carries at least one value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "filter", rename_all = "snake_case")]
pub enum FieldFilter {
    /// Matches when the field equals any of `values`.
    Equal { field: String, values: Vec<String> },
    /// Matches when the field is strictly less than `value`.
    LessThan { field: String, value: i64 },
    /// Matches when the field is less than or equal to `value`.
    LessThanOrEqual { field: String, value: i64 },
    /// Matches when the field is strictly greater than `value`.
    GreaterThan { field: String, value: i64 },
    /// Matches when the field is greater than or equal to `value`.
    GreaterThanOrEqual { field: String, value: i64 },
    /// Matches when `from <= field <= to`.
    Between { field: String, from: i64, to: i64 },
    /// Matches the field against a SQL `LIKE` pattern.
    Like { field: String, value: String },
}

impl FieldFilter {
    /// The field this filter applies to.
    pub fn field(&self) -> &str {
        match self {
            Self::Equal { field, .. }
            | Self::LessThan { field, .. }
            | Self::LessThanOrEqual { field, .. }
            | Self::GreaterThan { field, .. }
            | Self::GreaterThanOrEqual { field, .. }
            | Self::Between { field, .. }
            | Self::Like { field, .. } => field,
        }
    }

    /// The operator this filter was parsed from.
    pub fn op(&self) -> FilterOp {
        match self {
            Self::Equal { .. } => FilterOp::Eq,
            Self::LessThan { .. } => FilterOp::Lt,
            Self::LessThanOrEqual { .. } => FilterOp::Lte,
            Self::GreaterThan { .. } => FilterOp::Gt,
            Self::GreaterThanOrEqual { .. } => FilterOp::Gte,
            Self::Between { .. } => FilterOp::Between,
            Self::Like { .. } => FilterOp::Like,
        }
    }

    /// Shorthand for an equality filter on a single value.
    pub fn equal(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Equal {
            field: field.into(),
            values: vec![value.into()],
        }
    }

    /// Shorthand for a `LIKE` filter.
    pub fn like(field: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self::Like {
            field: field.into(),
            value: pattern.into(),
        }
    }
}
