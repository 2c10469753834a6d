//! PostgreSQL access for the ERP backend: pool setup, migrations, models
//! and repositories.

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

/// Whether the draft table has been created by the migrations.
pub async fn drafts_table_ready(pool: &DbPool) -> Result<bool, sqlx::Error> {
    let (ready,): (bool,) =
        sqlx::query_as("SELECT to_regclass('public.sales_order_drafts') IS NOT NULL")
            .fetch_one(pool)
            .await?;
    Ok(ready)
}

/// Apply any pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
