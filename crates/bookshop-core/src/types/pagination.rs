//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};

use crate::config::pagination::PaginationConfig;

/// Default page number.
pub const DEFAULT_PAGE: i64 = 1;
/// Default number of rows per page.
pub const DEFAULT_LIMIT: i64 = 5;
/// Upper bound on rows per page.
pub const MAX_LIMIT: i64 = 20;

/// Normalized `{page, limit}` pair for one list request.
///
/// Built fresh per request by [`PaginationParameters::normalize`] and never
/// mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationParameters {
    /// Page number (1-based).
    pub page: i64,
    /// Number of rows per page.
    pub limit: i64,
}

impl PaginationParameters {
    /// Normalize raw `page`/`limit` inputs with the built-in bounds.
    ///
    /// Missing or zero inputs fall back to the defaults, a page below 1 is
    /// raised to 1 and a limit above the maximum is lowered to it. A
    /// negative limit is passed through unchanged.
    pub fn normalize(raw_page: Option<i64>, raw_limit: Option<i64>) -> Self {
        PaginationConfig::default().normalize(raw_page, raw_limit)
    }

    /// Number of rows to skip (`(page - 1) * limit`).
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }

    /// Maximum number of rows to return.
    pub fn limit(&self) -> i64 {
        self.limit
    }
}

impl Default for PaginationParameters {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PaginationConfig {
    /// Normalize raw `page`/`limit` inputs against these bounds.
    pub fn normalize(&self, raw_page: Option<i64>, raw_limit: Option<i64>) -> PaginationParameters {
        let mut page = raw_page
            .filter(|p| *p != 0)
            .unwrap_or(self.default_page);
        if page < self.default_page {
            page = self.default_page;
        }

        let mut limit = raw_limit
            .filter(|l| *l != 0)
            .unwrap_or(self.default_limit);
        if limit > self.max_limit {
            limit = self.max_limit;
        }

        PaginationParameters { page, limit }
    }
}

/// Paginated response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T: Serialize> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Current page number (1-based).
    pub page: i64,
    /// Number of items per page.
    pub limit: i64,
    /// Total number of matching items across all pages.
    pub total_items: u64,
    /// Total number of pages.
    pub total_pages: u64,
    /// Whether there is a next page.
    pub has_next: bool,
    /// Whether there is a previous page.
    pub has_previous: bool,
}

impl<T: Serialize> PageResponse<T> {
    /// Create a new paginated response.
    pub fn new(items: Vec<T>, page: &PaginationParameters, total_items: u64) -> Self {
        let total_pages = match u64::try_from(page.limit) {
            Ok(limit) if limit > 0 && total_items > 0 => total_items.div_ceil(limit),
            _ => 1,
        };
        let current = u64::try_from(page.page).unwrap_or(1);
        Self {
            items,
            page: page.page,
            limit: page.limit,
            total_items,
            total_pages,
            has_next: current < total_pages,
            has_previous: page.page > 1,
        }
    }
}
