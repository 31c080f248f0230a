//! Pagination bounds for list endpoints.

use serde::{Deserialize, Serialize};

use crate::types::pagination::{DEFAULT_LIMIT, DEFAULT_PAGE, MAX_LIMIT};

/// Defaults and upper bound applied when normalizing `page`/`limit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Page used when none is given; also the lowest allowed page.
    #[serde(default = "default_page")]
    pub default_page: i64,
    /// Rows per page when no limit is given.
    #[serde(default = "default_limit")]
    pub default_limit: i64,
    /// Largest allowed rows per page.
    #[serde(default = "max_limit")]
    pub max_limit: i64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page: DEFAULT_PAGE,
            default_limit: DEFAULT_LIMIT,
            max_limit: MAX_LIMIT,
        }
    }
}

fn default_page() -> i64 {
    DEFAULT_PAGE
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

fn max_limit() -> i64 {
    MAX_LIMIT
}
