// Pagination parameter coercion and offset arithmetic

use evently_contracts::{ListQuery, Pagination};

const DEFAULT_PAGE: i64 = 1;
const DEFAULT_LIMIT: i64 = 10;

/// Normalized pagination parameters: `page >= 1`, `limit >= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    pub page: i64,
    pub limit: i64,
}

impl PageParams {
    /// Coerce raw query parameters. Missing values take the defaults
    /// (page 1, limit 10); zero or negative values are clamped to 1.
    pub fn from_query(query: &ListQuery) -> Self {
        Self {
            page: query.page.unwrap_or(DEFAULT_PAGE).max(1),
            limit: query.limit.unwrap_or(DEFAULT_LIMIT).max(1),
        }
    }

    /// Number of records to skip before the requested page.
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.limit
    }

    /// Pagination metadata for a total count under the same filter.
    pub fn metadata(&self, total: i64) -> Pagination {
        Pagination::of(self.page, self.limit, total)
    }
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}
