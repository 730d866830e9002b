//! Vendor repository abstraction and its implementations.

pub mod memory;
pub mod vendor;

use async_trait::async_trait;

use vendorhub_core::result::AppResult;
use vendorhub_core::types::id::VendorId;
use vendorhub_core::types::pagination::{PageRequest, PageResponse};
use vendorhub_entity::vendor::model::{NewVendor, Vendor, VendorFields};

pub use memory::MemoryVendorRepository;
pub use vendor::PgVendorRepository;

/// Persistence operations for vendor records.
///
/// Listing returns records in insertion order. Updates never move a record
/// within that order.
#[async_trait]
pub trait VendorRepository: Send + Sync + std::fmt::Debug + 'static {
    /// Find a vendor by ID.
    async fn find_by_id(&self, id: VendorId) -> AppResult<Option<Vendor>>;

    /// One page of vendors plus the total record count.
    async fn find_page(&self, page: PageRequest) -> AppResult<PageResponse<Vendor>>;

    /// Total number of stored vendors.
    async fn count(&self) -> AppResult<u64>;

    /// Persist a new vendor and return the stored record.
    async fn create(&self, new: NewVendor) -> AppResult<Vendor>;

    /// Replace the mutable fields of an existing vendor.
    ///
    /// Returns `None` when no record has this ID.
    async fn update(&self, id: VendorId, fields: VendorFields) -> AppResult<Option<Vendor>>;

    /// Remove a vendor. Returns whether a record was removed.
    async fn delete(&self, id: VendorId) -> AppResult<bool>;

    /// Check that the backend is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}
