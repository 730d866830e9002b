//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};

/// Default page size for vendor listings.
pub const DEFAULT_PAGE_SIZE: u64 = 6;
/// Maximum page size accepted from callers.
pub const MAX_PAGE_SIZE: u64 = 100;

/// Request parameters for paginated queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-based).
    #[serde(default = "default_page")]
    pub page: u64,
    /// Number of items per page.
    #[serde(default = "default_page_size")]
    pub limit: u64,
}

impl PageRequest {
    /// Create a new page request, normalizing zero values to defaults and
    /// capping `limit` at [`MAX_PAGE_SIZE`].
    pub fn new(page: u64, limit: u64) -> Self {
        Self {
            page: if page == 0 { default_page() } else { page },
            limit: if limit == 0 {
                DEFAULT_PAGE_SIZE
            } else {
                limit.min(MAX_PAGE_SIZE)
            },
        }
    }

    /// Build a page request from raw query-string values.
    ///
    /// Absent, non-numeric, zero or negative inputs fall back to the
    /// defaults. Surrounding whitespace is ignored.
    pub fn from_raw(page: Option<&str>, limit: Option<&str>) -> Self {
        Self::new(coerce_positive(page), coerce_positive(limit))
    }

    /// Calculate the SQL `OFFSET` value.
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }

    /// Return the SQL `LIMIT` value.
    pub fn limit(&self) -> u64 {
        self.limit
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of results together with the total count across all pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Total number of items across all pages.
    pub total: u64,
    /// Current page number (1-based).
    pub page: u64,
    /// Page size used for this query.
    pub limit: u64,
}

impl<T> PageResponse<T> {
    /// Create a new paginated response.
    pub fn new(items: Vec<T>, total: u64, request: PageRequest) -> Self {
        Self {
            items,
            total,
            page: request.page,
            limit: request.limit,
        }
    }

    /// Total number of pages.
    pub fn total_pages(&self) -> u64 {
        page_count(self.total, self.limit)
    }
}

/// Number of pages needed to show `total` items `limit` at a time.
///
/// Zero items means zero pages.
pub fn page_count(total: u64, limit: u64) -> u64 {
    if limit == 0 {
        return 0;
    }
    total.div_ceil(limit)
}

fn coerce_positive(raw: Option<&str>) -> u64 {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|n| *n > 0)
        .map(|n| n as u64)
        .unwrap_or(0)
}

fn default_page() -> u64 {
    1
}

fn default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}
