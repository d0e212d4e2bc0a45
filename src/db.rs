//! Database connection and schema bootstrap.

use sqlx::{SqlitePool, pool::PoolOptions};

/// The database schema.
pub const SCHEMA: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/schema.sql"));

/// Connects to the database.
pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    PoolOptions::new().connect(database_url).await
}

/// Creates any missing tables, indices and triggers.
///
/// Existing tables are left as they are.
pub async fn bootstrap(db: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(SCHEMA).execute(db).await?;
    Ok(())
}
