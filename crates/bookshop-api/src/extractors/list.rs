//! Query parameters shared by the filtered list endpoints.

use serde::{Deserialize, Serialize};

use bookshop_core::config::PaginationConfig;
use bookshop_core::types::PaginationParameters;

/// `?filter=...&page=...&limit=...` for list endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListParams {
    /// JSON array of `field||op||value` strings.
    pub filter: Option<String>,
    /// Page number (1-based). Blank or non-integer input counts as absent.
    #[serde(default, deserialize_with = "deserialize_lenient_i64")]
    pub page: Option<i64>,
    /// Rows per page. Blank or non-integer input counts as absent.
    #[serde(default, deserialize_with = "deserialize_lenient_i64")]
    pub limit: Option<i64>,
}

/// Read an optional integer from a query value, treating anything that is
/// not a base-10 `i64` as missing.
fn deserialize_lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<String> = serde::Deserialize::deserialize(deserializer)?;
    Ok(raw.and_then(|value| value.trim().parse().ok()))
}

impl ListParams {
    /// The raw filter, treating an empty value as absent.
    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref().filter(|f| !f.trim().is_empty())
    }

    /// Normalizes `page`/`limit` against the configured bounds.
    pub fn pagination(&self, config: &PaginationConfig) -> PaginationParameters {
        config.normalize(self.page, self.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_query(query: &str) -> ListParams {
        axum::extract::Query::<ListParams>::try_from_uri(
            &format!("/api/books?{query}").parse::<axum::http::Uri>().unwrap(),
        )
        .unwrap()
        .0
    }

    #[test]
    fn test_blank_and_garbage_numbers_are_absent() {
        for query in ["page=", "page=abc", "limit=1.5", "page=&limit=", "limit=%20"] {
            let params = from_query(query);
            assert_eq!(params.page, None, "{query}");
            assert_eq!(params.limit, None, "{query}");
        }
    }

    #[test]
    fn test_numbers_are_read() {
        let params = from_query("page=3&limit=-2&filter=%5B%5D");
        assert_eq!(params.page, Some(3));
        assert_eq!(params.limit, Some(-2));
        assert_eq!(params.filter(), Some("[]"));
    }

    #[test]
    fn test_empty_filter_is_absent() {
        let params = ListParams {
            filter: Some("  ".to_string()),
            ..Default::default()
        };
        assert_eq!(params.filter(), None);
    }

    #[test]
    fn test_pagination_uses_config() {
        let params = ListParams {
            filter: None,
            page: Some(0),
            limit: Some(100),
        };
        let config = PaginationConfig {
            default_page: 1,
            default_limit: 10,
            max_limit: 50,
        };
        assert_eq!(
            params.pagination(&config),
            PaginationParameters { page: 1, limit: 50 }
        );
    }
}
