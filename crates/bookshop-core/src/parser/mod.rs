//! Parser for the compact `filter` expression language.
//!
//! A `filter` query value is a JSON array of strings. Each string is one
//! filter element of the form `field||op||value`:
//!
//! ```text
//! ["title||like||%harry%", "price||between||10,20", "author_id||eq||3,7"]
//! ```
//!
//! Elements are checked against a [`FieldFilterWhitelist`]. Malformed
//! elements fail the whole batch with a [`FilterSyntaxError`]; well-formed
//! elements on fields or operators the whitelist does not allow are dropped.

pub mod codec;
pub mod error;

use tracing::debug;

use crate::types::filter::{FieldFilter, FilterOp};
use crate::types::whitelist::FieldFilterWhitelist;

use self::codec::{ValueError, parse_required_number, split_values};
pub use self::error::FilterSyntaxError;

/// Separator between the parts of one filter element.
pub const ELEMENT_SEPARATOR: &str = "||";

/// Why a well-formed element was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The field is not in the whitelist.
    UnlistedField,
    /// The field is listed but does not allow the operator.
    OperatorNotAllowed,
    /// The operator literal is not one of the known operators.
    UnknownOperator,
}

/// Result of parsing a single filter element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementOutcome {
    /// The element is valid and allowed.
    Accepted(FieldFilter),
    /// The element is well-formed but not allowed; it is ignored.
    Skipped(SkipReason),
    /// The element is malformed; the batch fails.
    Rejected(FilterSyntaxError),
}

/// Parses `filter` expressions against one endpoint's whitelist.
#[derive(Debug, Clone, Copy)]
pub struct FilterParser<'a> {
    whitelist: &'a FieldFilterWhitelist,
}

impl<'a> FilterParser<'a> {
    /// Create a parser bound to `whitelist`.
    pub fn new(whitelist: &'a FieldFilterWhitelist) -> Self {
        Self { whitelist }
    }

    /// Parse a raw JSON array of filter elements.
    ///
    /// Returns the accepted filters in input order. Duplicates are kept.
    pub fn parse(&self, raw: &str) -> Result<Vec<FieldFilter>, FilterSyntaxError> {
        let elements: Vec<String> =
            serde_json::from_str(raw).map_err(|e| FilterSyntaxError::MalformedJson {
                detail: e.to_string(),
            })?;

        let mut filters = Vec::with_capacity(elements.len());
        for (index, element) in elements.iter().enumerate() {
            match self.parse_element(index, element) {
                ElementOutcome::Accepted(filter) => filters.push(filter),
                ElementOutcome::Skipped(reason) => {
                    debug!(index, element = %element, ?reason, "Ignoring filter element");
                }
                ElementOutcome::Rejected(err) => return Err(err),
            }
        }

        Ok(filters)
    }

    /// Parse an optional query value. Absent or blank input yields no filters.
    pub fn parse_optional(&self, raw: Option<&str>) -> Result<Vec<FieldFilter>, FilterSyntaxError> {
        match raw {
            Some(raw) if !raw.trim().is_empty() => self.parse(raw),
            _ => Ok(Vec::new()),
        }
    }

    /// Classify one `field||op||value` element.
    pub fn parse_element(&self, index: usize, element: &str) -> ElementOutcome {
        let parts: Vec<&str> = element.split(ELEMENT_SEPARATOR).collect();
        let [field, symbol, payload] = parts.as_slice() else {
            return ElementOutcome::Rejected(FilterSyntaxError::WrongTokenCount {
                index,
                found: parts.len(),
            });
        };

        if field.is_empty() {
            return ElementOutcome::Rejected(FilterSyntaxError::MissingField { index });
        }
        if symbol.is_empty() {
            return ElementOutcome::Rejected(FilterSyntaxError::MissingOperator { index });
        }

        let Some(op) = FilterOp::from_symbol(symbol) else {
            return ElementOutcome::Skipped(SkipReason::UnknownOperator);
        };
        match self.whitelist.operators(field) {
            None => return ElementOutcome::Skipped(SkipReason::UnlistedField),
            Some(ops) if !ops.contains(op) => {
                return ElementOutcome::Skipped(SkipReason::OperatorNotAllowed);
            }
            Some(_) => {}
        }

        match build_filter(field, op, payload) {
            Ok(filter) => ElementOutcome::Accepted(filter),
            Err(err) => ElementOutcome::Rejected(err.at(index, field, op)),
        }
    }
}

/// Parse `raw` against `whitelist`. See [`FilterParser::parse`].
pub fn parse(raw: &str, whitelist: &FieldFilterWhitelist) -> Result<Vec<FieldFilter>, FilterSyntaxError> {
    FilterParser::new(whitelist).parse(raw)
}

fn build_filter(field: &str, op: FilterOp, payload: &str) -> Result<FieldFilter, ValueError> {
    let field = field.to_string();
    let filter = match op {
        FilterOp::Eq => {
            if payload.is_empty() {
                return Err(ValueError::Missing);
            }
            FieldFilter::Equal {
                field,
                values: split_values(payload),
            }
        }
        FilterOp::Lt => FieldFilter::LessThan {
            field,
            value: parse_required_number(Some(payload))?,
        },
        FilterOp::Lte => FieldFilter::LessThanOrEqual {
            field,
            value: parse_required_number(Some(payload))?,
        },
        FilterOp::Gt => FieldFilter::GreaterThan {
            field,
            value: parse_required_number(Some(payload))?,
        },
        FilterOp::Gte => FieldFilter::GreaterThanOrEqual {
            field,
            value: parse_required_number(Some(payload))?,
        },
        FilterOp::Between => {
            if payload.is_empty() {
                return Err(ValueError::Missing);
            }
            let bounds: Vec<&str> = payload.split(codec::VALUE_SEPARATOR).collect();
            let [from, to] = bounds.as_slice() else {
                return Err(ValueError::Arity(bounds.len()));
            };
            FieldFilter::Between {
                field,
                from: parse_required_number(Some(*from))?,
                to: parse_required_number(Some(*to))?,
            }
        }
        FilterOp::Like => FieldFilter::Like {
            field,
            value: payload.to_string(),
        },
    };
    Ok(filter)
}
