use bb8::{Pool, RunError};
use bb8_postgres::PostgresConnectionManager;
use thiserror::Error;
use tokio_postgres::NoTls;

use crate::types::ConnectionPool;

refinery::embed_migrations!("migrations");

#[derive(Debug, Error)]
pub enum DbError {
    #[error("postgres error: {0}")]
    Postgres(#[from] tokio_postgres::Error),
    #[error("could not check out a database connection: {0}")]
    Pool(#[from] RunError<tokio_postgres::Error>),
    #[error("migration failed: {0}")]
    Migration(#[from] refinery::Error),
}

pub async fn connect(database_url: &str, max_size: u32) -> Result<ConnectionPool, DbError> {
    let manager = PostgresConnectionManager::new_from_stringlike(database_url, NoTls)?;

    let pool = Pool::builder().max_size(max_size).build(manager).await?;
    Ok(pool)
}

/// Creates the notes table if this database has not seen it yet.
pub async fn run_migrations(pool: &ConnectionPool) -> Result<(), DbError> {
    let mut conn = pool.get().await?;

    let report = migrations::runner().run_async(&mut *conn).await?;
    for migration in report.applied_migrations() {
        tracing::info!(name = migration.name(), version = migration.version(), "migration applied");
    }

    Ok(())
}
