//! PostgreSQL vendor repository.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

use vendorhub_core::error::{AppError, ErrorKind};
use vendorhub_core::result::AppResult;
use vendorhub_core::types::id::VendorId;
use vendorhub_core::types::pagination::{PageRequest, PageResponse};
use vendorhub_entity::vendor::model::{NewVendor, Vendor, VendorFields};

use super::VendorRepository;

const COLUMNS: &str = "id, name, account_no, bank_name, address_line1, address_line2, \
                       city, country, zip_code, creator_email, created_at, updated_at";

/// Vendor repository backed by the `vendors` table.
#[derive(Debug, Clone)]
pub struct PgVendorRepository {
    pool: PgPool,
}

impl PgVendorRepository {
    /// Create a new vendor repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VendorRepository for PgVendorRepository {
    async fn find_by_id(&self, id: VendorId) -> AppResult<Option<Vendor>> {
        sqlx::query_as::<_, Vendor>(&format!("SELECT {COLUMNS} FROM vendors WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find vendor", e))
    }

    async fn find_page(&self, page: PageRequest) -> AppResult<PageResponse<Vendor>> {
        let total = self.count().await?;

        let vendors = sqlx::query_as::<_, Vendor>(&format!(
            "SELECT {COLUMNS} FROM vendors ORDER BY seq LIMIT $1 OFFSET $2"
        ))
        .bind(page.limit() as i64)
        .bind(i64::try_from(page.offset()).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list vendors", e))?;

        Ok(PageResponse::new(vendors, total, page))
    }

    async fn count(&self) -> AppResult<u64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM vendors")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count vendors", e))?;
        Ok(total.max(0) as u64)
    }

    async fn create(&self, new: NewVendor) -> AppResult<Vendor> {
        let vendor = Vendor::create(new, Utc::now());
        sqlx::query_as::<_, Vendor>(&format!(
            "INSERT INTO vendors ({COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) \
             RETURNING {COLUMNS}"
        ))
        .bind(vendor.id)
        .bind(&vendor.name)
        .bind(&vendor.account_no)
        .bind(&vendor.bank_name)
        .bind(&vendor.address_line1)
        .bind(&vendor.address_line2)
        .bind(&vendor.city)
        .bind(&vendor.country)
        .bind(&vendor.zip_code)
        .bind(&vendor.creator_email)
        .bind(vendor.created_at)
        .bind(vendor.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create vendor", e))
    }

    async fn update(&self, id: VendorId, fields: VendorFields) -> AppResult<Option<Vendor>> {
        sqlx::query_as::<_, Vendor>(&format!(
            "UPDATE vendors SET name = $2, account_no = $3, bank_name = $4, \
             address_line1 = $5, address_line2 = $6, city = $7, country = $8, \
             zip_code = $9, updated_at = NOW() \
             WHERE id = $1 RETURNING {COLUMNS}"
        ))
        .bind(id)
        .bind(&fields.name)
        .bind(&fields.account_no)
        .bind(&fields.bank_name)
        .bind(&fields.address_line1)
        .bind(&fields.address_line2)
        .bind(&fields.city)
        .bind(&fields.country)
        .bind(&fields.zip_code)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update vendor", e))
    }

    async fn delete(&self, id: VendorId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM vendors WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete vendor", e))?;
        Ok(result.rows_affected() > 0)
    }

    async fn health_check(&self) -> AppResult<bool> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|v| v == 1)
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Health check failed", e))
    }
}
