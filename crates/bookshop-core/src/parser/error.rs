//! Errors raised while parsing a `filter` expression.

use thiserror::Error;

use crate::types::filter::FilterOp;

/// A `filter` expression is malformed.
///
/// Any of these aborts parsing of the whole batch. Well-formed elements that
/// the whitelist does not allow are never reported through this type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterSyntaxError {
    /// The outer value is not a JSON array of strings.
    #[error("filter must be a JSON array of strings: {detail}")]
    MalformedJson {
        /// Decoder message.
        detail: String,
    },

    /// An element does not split into exactly `field||op||value`.
    #[error("filter element {index} must have exactly 3 '||'-separated parts, found {found}")]
    WrongTokenCount {
        /// Position of the element in the array.
        index: usize,
        /// Number of parts found.
        found: usize,
    },

    /// An element has an empty field name.
    #[error("filter element {index} has an empty field name")]
    MissingField {
        /// Position of the element in the array.
        index: usize,
    },

    /// An element has an empty operator.
    #[error("filter element {index} has an empty operator")]
    MissingOperator {
        /// Position of the element in the array.
        index: usize,
    },

    /// The value payload is empty for an operator that needs one.
    #[error("filter element {index} on '{field}' is missing a value for '{op}'")]
    MissingValue {
        /// Position of the element in the array.
        index: usize,
        /// Field being filtered.
        field: String,
        /// Requested operator.
        op: FilterOp,
    },

    /// A numeric operand does not parse as an integer.
    #[error("filter element {index} on '{field}': '{token}' is not an integer")]
    NotANumber {
        /// Position of the element in the array.
        index: usize,
        /// Field being filtered.
        field: String,
        /// The offending token.
        token: String,
    },

    /// `between` did not receive exactly two values.
    #[error("filter element {index} on '{field}': 'between' expects 2 values, found {found}")]
    BetweenArity {
        /// Position of the element in the array.
        index: usize,
        /// Field being filtered.
        field: String,
        /// Number of values found.
        found: usize,
    },
}

impl FilterSyntaxError {
    /// Stable machine-readable code for this failure.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MalformedJson { .. } => "malformed_json",
            Self::WrongTokenCount { .. } => "wrong_token_count",
            Self::MissingField { .. } => "missing_field",
            Self::MissingOperator { .. } => "missing_operator",
            Self::MissingValue { .. } => "missing_value",
            Self::NotANumber { .. } => "not_a_number",
            Self::BetweenArity { .. } => "between_arity",
        }
    }
}
