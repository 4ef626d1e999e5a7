// Common DTOs shared across endpoints

use serde::{Deserialize, Serialize};

/// Pagination metadata returned alongside every list result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub pages: i64,
}

impl Pagination {
    /// Build pagination metadata for a page already coerced to `page >= 1`
    /// and `limit >= 1`. `pages` is `ceil(total / limit)`.
    pub fn of(page: i64, limit: i64, total: i64) -> Self {
        Self {
            page,
            limit,
            total,
            // ceil(total / limit); limit >= 1 and total >= 0
            pages: (total + limit - 1) / limit,
        }
    }
}

/// Query parameters for paginated list endpoints.
///
/// Both fields are optional; missing or out-of-range values are coerced
/// by the service (page defaults to 1, limit to 10).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

/// Acknowledgement returned by operations whose only result is a message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub message: String,
}

impl SuccessResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_is_ceiling_of_total_over_limit() {
        assert_eq!(Pagination::of(1, 10, 25).pages, 3);
        assert_eq!(Pagination::of(1, 10, 30).pages, 3);
        assert_eq!(Pagination::of(1, 10, 31).pages, 4);
        assert_eq!(Pagination::of(1, 10, 0).pages, 0);
        assert_eq!(Pagination::of(1, 1, 1).pages, 1);
    }
}
