//! Database access layer: connection pool helpers, entity models, and
//! repositories for the adforge backend.

pub mod models;
pub mod repositories;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Alias used throughout the API layer.
pub type DbPool = PgPool;

/// Create a connection pool for the given `DATABASE_URL`.
///
/// Connections are established lazily, so this succeeds even if the
/// database is briefly unavailable at startup; [`health_check`] verifies
/// actual connectivity.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending migrations from the embedded `migrations/` directory.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
