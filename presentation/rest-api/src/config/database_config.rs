use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;

use super::env::{ConfigError, Lookup, required, string_or};

/// Catalog database settings
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (required)
/// - DATABASE_MIGRATIONS_PATH: migrations directory (default: "./migrations")
#[derive(Debug, Clone)]
pub struct CatalogDatabaseConfig {
    pub url: String,
    pub migrations_path: String,
}

impl CatalogDatabaseConfig {
    pub fn from_lookup(lookup: Lookup) -> Result<Self, ConfigError> {
        Ok(Self {
            url: required(lookup, "DATABASE_URL")?,
            migrations_path: string_or(lookup, "DATABASE_MIGRATIONS_PATH", "./migrations"),
        })
    }
}

/// Connects the pool and applies pending migrations.
pub async fn init_database(config: &CatalogDatabaseConfig) -> anyhow::Result<PgPool> {
    let pool = create_postgres_pool(&DatabaseConfig::new(config.url.clone())).await?;
    run_migrations(&pool, &config.migrations_path).await?;
    Ok(pool)
}
