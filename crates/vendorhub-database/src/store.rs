//! Vendor store that dispatches to the configured backend.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use vendorhub_core::config::AppConfig;
use vendorhub_core::error::AppError;
use vendorhub_core::result::AppResult;
use vendorhub_core::types::id::VendorId;
use vendorhub_core::types::pagination::{PageRequest, PageResponse};
use vendorhub_entity::vendor::model::{NewVendor, Vendor, VendorFields};

use crate::connection::DatabasePool;
use crate::repositories::{MemoryVendorRepository, PgVendorRepository, VendorRepository};
use crate::schema::ensure_schema;

/// Vendor store wrapping the repository selected by `store.provider`.
#[derive(Debug, Clone)]
pub struct VendorStore {
    inner: Arc<dyn VendorRepository>,
    provider: &'static str,
}

impl VendorStore {
    /// Build the store from configuration, connecting to PostgreSQL and
    /// bootstrapping the schema when that provider is selected.
    pub async fn new(config: &AppConfig) -> AppResult<Self> {
        match config.store.provider.as_str() {
            "postgres" => {
                info!("Initializing PostgreSQL vendor store");
                let pool = DatabasePool::connect(&config.database).await?;
                ensure_schema(pool.pool()).await?;
                Ok(Self {
                    inner: Arc::new(PgVendorRepository::new(pool.into_pool())),
                    provider: "postgres",
                })
            }
            "memory" => {
                info!("Initializing in-memory vendor store");
                Ok(Self::memory())
            }
            other => Err(AppError::configuration(format!(
                "Unknown store provider: '{other}'. Supported: postgres, memory"
            ))),
        }
    }

    /// An empty in-memory store.
    pub fn memory() -> Self {
        Self {
            inner: Arc::new(MemoryVendorRepository::new()),
            provider: "memory",
        }
    }

    /// Name of the active backend.
    pub fn provider(&self) -> &'static str {
        self.provider
    }
}

#[async_trait]
impl VendorRepository for VendorStore {
    async fn find_by_id(&self, id: VendorId) -> AppResult<Option<Vendor>> {
        self.inner.find_by_id(id).await
    }

    async fn find_page(&self, page: PageRequest) -> AppResult<PageResponse<Vendor>> {
        self.inner.find_page(page).await
    }

    async fn count(&self) -> AppResult<u64> {
        self.inner.count().await
    }

    async fn create(&self, new: NewVendor) -> AppResult<Vendor> {
        self.inner.create(new).await
    }

    async fn update(&self, id: VendorId, fields: VendorFields) -> AppResult<Option<Vendor>> {
        self.inner.update(id, fields).await
    }

    async fn delete(&self, id: VendorId) -> AppResult<bool> {
        self.inner.delete(id).await
    }

    async fn health_check(&self) -> AppResult<bool> {
        self.inner.health_check().await
    }
}
