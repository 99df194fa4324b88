//! SampleData persistence. Explicit parameterized SQL against PostgreSQL.

use crate::error::AppError;
use crate::model::{NewSampleData, SampleData, SampleDataChange};
use async_trait::async_trait;
use sqlx::PgPool;

/// Result of an optimistic overwrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Updated,
    NotFound,
    /// Row exists but its `updated_at` no longer matches the caller's token.
    /// Only possible when a token was supplied.
    Conflict,
}

#[async_trait]
pub trait SampleDataStore: Send + Sync {
    /// All rows, newest `created_at` first.
    async fn list(&self) -> Result<Vec<SampleData>, AppError>;
    async fn get(&self, id: i32) -> Result<Option<SampleData>, AppError>;
    async fn create(&self, new: NewSampleData) -> Result<SampleData, AppError>;
    async fn update(&self, change: SampleDataChange) -> Result<UpdateOutcome, AppError>;
    /// Hard delete. Returns false when no row had that id.
    async fn delete(&self, id: i32) -> Result<bool, AppError>;
    /// Lightweight connectivity probe.
    async fn ping(&self) -> Result<(), AppError>;
}

const COLUMNS: &str = "id, name, description, created_at, updated_at";

#[derive(Clone)]
pub struct PgSampleDataStore {
    pool: PgPool,
}

impl PgSampleDataStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn exists(&self, id: i32) -> Result<bool, AppError> {
        let found: bool = sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM sample_data WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(found)
    }
}

#[async_trait]
impl SampleDataStore for PgSampleDataStore {
    async fn list(&self) -> Result<Vec<SampleData>, AppError> {
        let sql = format!("SELECT {} FROM sample_data ORDER BY created_at DESC, id DESC", COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, SampleData>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get(&self, id: i32) -> Result<Option<SampleData>, AppError> {
        let sql = format!("SELECT {} FROM sample_data WHERE id = $1", COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, SampleData>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn create(&self, new: NewSampleData) -> Result<SampleData, AppError> {
        let sql = format!(
            "INSERT INTO sample_data (name, description, created_at) VALUES ($1, $2, $3) RETURNING {}",
            COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, SampleData>(&sql)
            .bind(&new.name)
            .bind(&new.description)
            .bind(new.created_at)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update(&self, change: SampleDataChange) -> Result<UpdateOutcome, AppError> {
        // GREATEST keeps updated_at >= created_at if the app clock is behind the row's creator.
        // $5 = false skips the token comparison entirely.
        let sql = "UPDATE sample_data \
                   SET name = $2, description = $3, updated_at = GREATEST($4, created_at) \
                   WHERE id = $1 AND (NOT $5 OR updated_at IS NOT DISTINCT FROM $6)";
        let guarded = change.expected_updated_at.is_some();
        tracing::debug!(sql = %sql, id = change.id, "query");
        let result = sqlx::query(sql)
            .bind(change.id)
            .bind(&change.name)
            .bind(&change.description)
            .bind(change.updated_at)
            .bind(guarded)
            .bind(change.expected_updated_at.flatten())
            .execute(&self.pool)
            .await?;
        if result.rows_affected() > 0 {
            return Ok(UpdateOutcome::Updated);
        }
        if guarded && self.exists(change.id).await? {
            Ok(UpdateOutcome::Conflict)
        } else {
            Ok(UpdateOutcome::NotFound)
        }
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM sample_data WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
