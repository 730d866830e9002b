//! In-process vendor repository.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use vendorhub_core::result::AppResult;
use vendorhub_core::types::id::VendorId;
use vendorhub_core::types::pagination::{PageRequest, PageResponse};
use vendorhub_entity::vendor::model::{NewVendor, Vendor, VendorFields};

use super::VendorRepository;

/// Vendor repository holding records in insertion order in memory.
///
/// Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryVendorRepository {
    vendors: RwLock<Vec<Vendor>>,
}

impl MemoryVendorRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VendorRepository for MemoryVendorRepository {
    async fn find_by_id(&self, id: VendorId) -> AppResult<Option<Vendor>> {
        let vendors = self.vendors.read().await;
        Ok(vendors.iter().find(|v| v.id == id).cloned())
    }

    async fn find_page(&self, page: PageRequest) -> AppResult<PageResponse<Vendor>> {
        let vendors = self.vendors.read().await;
        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(page.limit()).unwrap_or(usize::MAX);
        let items = vendors.iter().skip(offset).take(limit).cloned().collect();
        Ok(PageResponse::new(items, vendors.len() as u64, page))
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.vendors.read().await.len() as u64)
    }

    async fn create(&self, new: NewVendor) -> AppResult<Vendor> {
        let vendor = Vendor::create(new, Utc::now());
        self.vendors.write().await.push(vendor.clone());
        Ok(vendor)
    }

    async fn update(&self, id: VendorId, fields: VendorFields) -> AppResult<Option<Vendor>> {
        let mut vendors = self.vendors.write().await;
        Ok(vendors.iter_mut().find(|v| v.id == id).map(|vendor| {
            vendor.apply(fields, Utc::now());
            vendor.clone()
        }))
    }

    async fn delete(&self, id: VendorId) -> AppResult<bool> {
        let mut vendors = self.vendors.write().await;
        let before = vendors.len();
        vendors.retain(|v| v.id != id);
        Ok(vendors.len() < before)
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_vendor(name: &str) -> NewVendor {
        NewVendor {
            fields: VendorFields {
                name: name.to_string(),
                account_no: "123".into(),
                bank_name: "First Bank".into(),
                ..Default::default()
            },
            creator_email: "a@x.com".into(),
        }
    }

    async fn seeded(count: usize) -> MemoryVendorRepository {
        let repo = MemoryVendorRepository::new();
        for i in 0..count {
            repo.create(new_vendor(&format!("Vendor {i}"))).await.expect("create");
        }
        repo
    }

    #[tokio::test]
    async fn test_pages_follow_insertion_order() {
        let repo = seeded(13).await;
        let first = repo.find_page(PageRequest::new(1, 6)).await.expect("page");
        assert_eq!(first.items.len(), 6);
        assert_eq!(first.items[0].name, "Vendor 0");
        assert_eq!(first.total, 13);

        let last = repo.find_page(PageRequest::new(3, 6)).await.expect("page");
        assert_eq!(last.items.len(), 1);
        assert_eq!(last.items[0].name, "Vendor 12");
        assert_eq!(last.total, 13);
    }

    #[tokio::test]
    async fn test_page_past_end_is_empty() {
        let repo = seeded(4).await;
        let page = repo.find_page(PageRequest::new(9, 6)).await.expect("page");
        assert!(page.items.is_empty());
        assert_eq!(page.total, 4);
    }

    #[tokio::test]
    async fn test_update_keeps_position() {
        let repo = seeded(3).await;
        let target = repo.find_page(PageRequest::new(1, 6)).await.expect("page").items[0].clone();
        let updated = repo
            .update(target.id, new_vendor("Renamed").fields)
            .await
            .expect("update")
            .expect("exists");
        assert_eq!(updated.creator_email, target.creator_email);

        let page = repo.find_page(PageRequest::new(1, 6)).await.expect("page");
        assert_eq!(page.items[0].name, "Renamed");
    }

    #[tokio::test]
    async fn test_missing_ids() {
        let repo = seeded(1).await;
        let id = VendorId::new();
        assert!(repo.find_by_id(id).await.expect("find").is_none());
        assert!(repo.update(id, new_vendor("x").fields).await.expect("update").is_none());
        assert!(!repo.delete(id).await.expect("delete"));
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let repo = seeded(1).await;
        let id = repo.find_page(PageRequest::default()).await.expect("page").items[0].id;
        assert!(repo.delete(id).await.expect("delete"));
        assert!(!repo.delete(id).await.expect("delete"));
        assert_eq!(repo.count().await.expect("count"), 0);
    }
}
