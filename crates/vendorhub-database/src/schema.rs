//! Idempotent schema bootstrap for the `vendors` table.

use sqlx::PgPool;
use tracing::info;

use vendorhub_core::error::{AppError, ErrorKind};
use vendorhub_core::result::AppResult;

const CREATE_VENDORS: &str = r#"
CREATE TABLE IF NOT EXISTS vendors (
    seq            BIGSERIAL    NOT NULL,
    id             UUID         PRIMARY KEY,
    name           TEXT         NOT NULL,
    account_no     TEXT         NOT NULL,
    bank_name      TEXT         NOT NULL,
    address_line1  TEXT,
    address_line2  TEXT,
    city           TEXT,
    country        TEXT,
    zip_code       TEXT,
    creator_email  TEXT         NOT NULL,
    created_at     TIMESTAMPTZ  NOT NULL DEFAULT NOW(),
    updated_at     TIMESTAMPTZ  NOT NULL DEFAULT NOW()
)
"#;

const CREATE_SEQ_INDEX: &str =
    "CREATE UNIQUE INDEX IF NOT EXISTS vendors_seq_idx ON vendors (seq)";

/// Create the `vendors` table and its ordering index when missing.
pub async fn ensure_schema(pool: &PgPool) -> AppResult<()> {
    for statement in [CREATE_VENDORS, CREATE_SEQ_INDEX] {
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to bootstrap schema", e))?;
    }
    info!("Vendor schema ready");
    Ok(())
}
