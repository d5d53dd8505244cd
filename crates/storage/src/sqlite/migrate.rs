use sqlx::SqlitePool;

use super::SqliteInitError;

/// Runs the single migration for the current schema.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), SqliteInitError> {
    sqlx::query(
        r"
        CREATE TABLE IF NOT EXISTS kv_store (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );
        ",
    )
    .execute(pool)
    .await?;

    Ok(())
}
