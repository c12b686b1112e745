//! Database schema bootstrap

use sqlx::PgPool;
use tracing::info;

/// Table definitions; every statement is idempotent
pub const SCHEMA_SQL: &str = include_str!("../migrations/0001_init.sql");

/// Create the tables and indexes if they do not exist yet
pub async fn apply_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(SCHEMA_SQL).execute(pool).await?;
    info!("Database schema is up to date");
    Ok(())
}
