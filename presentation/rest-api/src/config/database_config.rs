use persistence::db::{DatabaseConfig, create_postgres_pool};
use sqlx::PgPool;
use std::env;

/// Initialize database connection pool from environment variables
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string. When unset the catalog runs
///   without a store and nothing outlives the process.
///
/// # Errors
/// Returns error if DATABASE_URL is set but the connection fails
pub async fn init_database() -> anyhow::Result<Option<PgPool>> {
    let Ok(db_url) = env::var("DATABASE_URL") else {
        tracing::warn!("DATABASE_URL not set, products are kept in memory only");
        return Ok(None);
    };
    let pool = create_postgres_pool(&DatabaseConfig::new(db_url)).await?;
    Ok(Some(pool))
}
