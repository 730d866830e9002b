//! Typed path parameter helpers.

use vendorhub_core::error::AppError;
use vendorhub_core::types::id::VendorId;

/// Parses a vendor ID from a path segment.
///
/// A segment that is not a UUID cannot name any record, so it is reported
/// as not found.
pub fn parse_vendor_id(s: &str) -> Result<VendorId, AppError> {
    s.parse()
        .map_err(|_| AppError::not_found(format!("Vendor {s} not found")))
}
