use sqlx::{PgPool, postgres::PgPoolOptions};
use std::{path::Path, time::Duration};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.connection_error: {0}")]
    ConnectionError(#[source] sqlx::Error),
    #[error("database.migrations_not_found: {0}")]
    MigrationsNotFound(String),
    #[error("database.migration_error: {0}")]
    MigrationError(#[source] sqlx::migrate::MigrateError),
}

/// Configuration for the catalog database connection
pub struct DatabaseConfig {
    pub connection_string: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    /// Creates a new database configuration with default pool limits
    pub fn new(connection_string: String) -> Self {
        Self {
            connection_string,
            max_connections: 5,
            acquire_timeout: Duration::from_secs(30),
        }
    }
}

/// Creates a PostgreSQL connection pool
pub async fn create_postgres_pool(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.connection_string)
        .await
        .map_err(DatabaseError::ConnectionError)
}

/// Creates the products table and seed rows if they are not applied yet
pub async fn run_migrations(pool: &PgPool, migrations_path: &str) -> Result<(), DatabaseError> {
    let path = Path::new(migrations_path);
    if !path.exists() {
        return Err(DatabaseError::MigrationsNotFound(migrations_path.to_string()));
    }

    sqlx::migrate::Migrator::new(path)
        .await
        .map_err(DatabaseError::MigrationError)?
        .run(pool)
        .await
        .map_err(DatabaseError::MigrationError)
}
