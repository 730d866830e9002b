//! Request DTOs.

use serde::{Deserialize, Serialize};

use vendorhub_entity::vendor::model::VendorFields;

/// Body of `POST /api/vendors` and `PUT /api/vendors/{id}`.
///
/// Unknown keys are ignored. In particular a client-supplied
/// `creatorEmail` never reaches the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorRequest {
    pub name: Option<String>,
    pub account_no: Option<String>,
    pub bank_name: Option<String>,
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub zip_code: Option<String>,
}

impl From<VendorRequest> for VendorFields {
    fn from(req: VendorRequest) -> Self {
        Self {
            name: req.name.unwrap_or_default(),
            account_no: req.account_no.unwrap_or_default(),
            bank_name: req.bank_name.unwrap_or_default(),
            address_line1: req.address_line1,
            address_line2: req.address_line2,
            city: req.city,
            country: req.country,
            zip_code: req.zip_code,
        }
    }
}
