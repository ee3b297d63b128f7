//! Database access layer: pool lifecycle, models, and repositories.
//!
//! The pool is constructed once at process start and handed to every
//! repository call explicitly. There is no process-wide singleton; owners
//! call [`close_pool`] on shutdown.

use sqlx::postgres::PgPoolOptions;

pub mod error;
pub mod models;
pub mod repositories;
pub mod types;

pub use error::{StoreError, StoreResult};

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> StoreResult<DbPool> {
    let pool = PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await?;
    tracing::debug!(max_connections = 20, "Connection pool created");
    Ok(pool)
}

/// Verify the store is reachable with a trivial round-trip query.
pub async fn health_check(pool: &DbPool) -> StoreResult<()> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply embedded migrations. Idempotent; safe to run on every start.
pub async fn run_migrations(pool: &DbPool) -> StoreResult<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::debug!("Embedded migrations applied");
    Ok(())
}

/// Close the pool, waiting for in-flight connections to be released.
pub async fn close_pool(pool: &DbPool) {
    pool.close().await;
}
