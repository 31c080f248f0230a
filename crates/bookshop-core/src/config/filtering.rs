//! Filter clause combination settings.

use serde::{Deserialize, Serialize};

use crate::query::Combination;

/// List filtering configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilteringConfig {
    /// `"all"` applies every filter; `"last_wins"` applies only the last one.
    #[serde(default)]
    pub combination: Combination,
}
