use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

use crate::config;

/// Errors from pool construction and migration
#[derive(Debug, Error)]
pub enum ManagerError {
    #[error("Missing configuration: {0}")]
    ConfigMissing(&'static str),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),

    #[error(transparent)]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Embedded migrations from `migrations/`
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();

/// Build the connection pool from `DATABASE_URL` with pool sizing from config.
pub async fn connect() -> Result<PgPool, ManagerError> {
    let database_url =
        std::env::var("DATABASE_URL").map_err(|_| ManagerError::ConfigMissing("DATABASE_URL"))?;

    let db_config = &config::config().database;
    let pool = PgPoolOptions::new()
        .max_connections(db_config.max_connections)
        .acquire_timeout(Duration::from_secs(db_config.connect_timeout_secs))
        .connect(&database_url)
        .await?;

    info!("Created database pool (max_connections={})", db_config.max_connections);
    Ok(pool)
}

/// Apply pending migrations at startup.
pub async fn run_migrations(pool: &PgPool) -> Result<(), ManagerError> {
    MIGRATOR.run(pool).await?;
    info!("Database migrations up to date");
    Ok(())
}
