//! Response DTOs.

use serde::{Deserialize, Serialize};

use vendorhub_core::types::pagination::PageResponse;
use vendorhub_entity::vendor::model::Vendor;

/// Body of `GET /api/vendors`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorListResponse {
    pub vendors: Vec<Vendor>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
}

impl From<PageResponse<Vendor>> for VendorListResponse {
    fn from(page: PageResponse<Vendor>) -> Self {
        Self {
            vendors: page.items,
            total: page.total,
            page: page.page,
            limit: page.limit,
        }
    }
}

/// Body of `DELETE /api/vendors/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
}

/// Body of `GET /api/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub store: String,
}
