//! List query parameter extractor.

use serde::Deserialize;

use vendorhub_core::types::pagination::PageRequest;

/// Query parameters of `GET /api/vendors`.
///
/// Values are kept as raw strings so that garbage like `?page=abc` falls
/// back to the defaults instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl ListQuery {
    /// Converts to a normalized `PageRequest`.
    pub fn into_page_request(self) -> PageRequest {
        PageRequest::from_raw(self.page.as_deref(), self.limit.as_deref())
    }
}
