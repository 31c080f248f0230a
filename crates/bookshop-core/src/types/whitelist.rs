//! Per-endpoint field/operator whitelists.

use std::collections::HashMap;

use serde::Deserialize;

use super::filter::{FilterOp, OperatorSet, UnknownOperator};

/// Restricts which field/operator pairs a caller may filter on.
///
/// Each list endpoint owns one whitelist. A filter on a field that is not
/// listed, or with an operator the field does not allow, is dropped by the
/// parser instead of being rejected, so callers cannot probe which fields
/// exist.
///
/// Deserializes from a map of field name to operator literals and rejects
/// any literal outside the closed operator set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "HashMap<String, Vec<String>>")]
pub struct FieldFilterWhitelist {
    fields: HashMap<String, OperatorSet>,
}

impl FieldFilterWhitelist {
    /// Create an empty whitelist. Every filter is dropped against it.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allow `ops` on `field`, merging with anything already allowed.
    pub fn allow(mut self, field: impl Into<String>, ops: impl IntoIterator<Item = FilterOp>) -> Self {
        let set = self.fields.entry(field.into()).or_default();
        for op in ops {
            set.insert(op);
        }
        self
    }

    /// Build a whitelist from operator literals.
    pub fn from_symbols<I, F, O, S>(entries: I) -> Result<Self, UnknownOperator>
    where
        I: IntoIterator<Item = (F, O)>,
        F: Into<String>,
        O: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut whitelist = Self::new();
        for (field, symbols) in entries {
            let ops = symbols
                .into_iter()
                .map(|s| s.as_ref().parse::<FilterOp>())
                .collect::<Result<Vec<_>, _>>()?;
            whitelist = whitelist.allow(field, ops);
        }
        Ok(whitelist)
    }

    /// Whether `op` is allowed on `field`.
    pub fn permits(&self, field: &str, op: FilterOp) -> bool {
        self.fields
            .get(field)
            .is_some_and(|set| set.contains(op))
    }

    /// The operators allowed on `field`, if it is listed.
    pub fn operators(&self, field: &str) -> Option<OperatorSet> {
        self.fields.get(field).copied()
    }

    /// Number of listed fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether no field is listed.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl TryFrom<HashMap<String, Vec<String>>> for FieldFilterWhitelist {
    type Error = UnknownOperator;

    fn try_from(map: HashMap<String, Vec<String>>) -> Result<Self, Self::Error> {
        Self::from_symbols(map)
    }
}
