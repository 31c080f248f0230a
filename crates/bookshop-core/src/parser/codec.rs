//! Scalar value decoding for filter payloads.

use crate::types::filter::FilterOp;

use super::error::FilterSyntaxError;

/// Separator between values in `eq` and `between` payloads.
pub const VALUE_SEPARATOR: char = ',';

/// Why a payload token could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// The token is absent or empty.
    Missing,
    /// The token is present but not an integer.
    NotANumber(String),
    /// A range payload has the wrong number of values.
    Arity(usize),
}

impl ValueError {
    /// Attach the element position, field and operator to build the
    /// user-facing error.
    pub fn at(self, index: usize, field: &str, op: FilterOp) -> FilterSyntaxError {
        match self {
            Self::Missing => FilterSyntaxError::MissingValue {
                index,
                field: field.to_string(),
                op,
            },
            Self::NotANumber(token) => FilterSyntaxError::NotANumber {
                index,
                field: field.to_string(),
                token,
            },
            Self::Arity(found) => FilterSyntaxError::BetweenArity {
                index,
                field: field.to_string(),
                found,
            },
        }
    }
}

/// Parse a required integer operand.
///
/// Surrounding ASCII whitespace is ignored. Zero is a valid operand.
pub fn parse_required_number(token: Option<&str>) -> Result<i64, ValueError> {
    let token = match token {
        Some(t) if !t.trim().is_empty() => t.trim(),
        _ => return Err(ValueError::Missing),
    };

    token
        .parse::<i64>()
        .map_err(|_| ValueError::NotANumber(token.to_string()))
}

/// Split a multi-value payload on [`VALUE_SEPARATOR`]. No escaping is
/// supported, so values cannot contain a comma.
pub fn split_values(payload: &str) -> Vec<String> {
    payload.split(VALUE_SEPARATOR).map(str::to_string).collect()
}
