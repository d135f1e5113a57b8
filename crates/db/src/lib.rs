//! Persistence layer: sqlx models, repositories and pool management.

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}

/// PostgreSQL error code for `unique_violation`.
const PG_UNIQUE_VIOLATION: &str = "23505";

/// Whether `err` is a violation of one of our named uniqueness rules.
///
/// Unique constraints and indexes are named with a `uq_` prefix; other
/// `23505` errors (e.g. a primary-key collision) are not treated as
/// user-facing conflicts.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            db_err.code().as_deref() == Some(PG_UNIQUE_VIOLATION)
                && db_err
                    .constraint()
                    .is_some_and(|name| name.starts_with("uq_"))
        }
        _ => false,
    }
}
