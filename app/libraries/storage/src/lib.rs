use app_error::AppError;
use app_schema::customer::CustomerRecord;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

/// Append-only sink for validated customer records. Rows are written once
/// and never read back, updated, or deleted by this service.
#[async_trait]
pub trait RecordSink: Send + Sync {
    async fn append(&self, record: &CustomerRecord) -> Result<(), AppError>;
}

// ---------- Postgres RecordSink ----------

pub struct PgRecordSink {
    pool: PgPool,
}

impl PgRecordSink {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn migrate(&self) -> Result<(), AppError> {
        sqlx::query("CREATE SCHEMA IF NOT EXISTS app;")
            .execute(&self.pool)
            .await?;
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS app.customer_records (
                id                BIGSERIAL PRIMARY KEY,
                age               BIGINT NOT NULL,
                subscription_type TEXT NOT NULL,
                gender            TEXT NOT NULL,
                contract_length   TEXT NOT NULL,
                usage_frequency   BIGINT NOT NULL,
                total_spend       DOUBLE PRECISION NOT NULL,
                support_calls     BIGINT NOT NULL,
                created_at        TIMESTAMPTZ NOT NULL
            );
            "#,
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

#[async_trait]
impl RecordSink for PgRecordSink {
    async fn append(&self, record: &CustomerRecord) -> Result<(), AppError> {
        // created_at is assigned here, never taken from the request.
        sqlx::query(CustomerRecord::insert_query())
            .bind(record.age)
            .bind(record.subscription_type.as_str())
            .bind(record.gender.as_str())
            .bind(record.contract_length.as_str())
            .bind(record.usage_frequency)
            .bind(record.total_spend)
            .bind(record.support_calls)
            .bind(Utc::now())
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
