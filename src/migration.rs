//! Schema migrations for owned tables. The same `migrations/` directory can be run with sqlx-cli.

use crate::error::AppError;
use sqlx::PgPool;

/// Apply pending migrations. Already-applied ones are skipped by version.
pub async fn apply_migrations(pool: &PgPool) -> Result<(), AppError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
