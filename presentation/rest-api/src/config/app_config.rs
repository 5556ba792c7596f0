use poem::middleware::Cors;

use super::catalog_config::CatalogConfig;
use super::cors_config;
use super::database_config::CatalogDatabaseConfig;
use super::env::{ConfigError, Lookup, process_env};
use super::provider_config::ProviderConfig;
use super::server_config::ServerConfig;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub database: CatalogDatabaseConfig,
    pub provider: ProviderConfig,
    pub catalog: CatalogConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&process_env)
    }

    pub fn from_lookup(lookup: Lookup) -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_lookup(lookup),
            cors: cors_config::init_cors(lookup),
            database: CatalogDatabaseConfig::from_lookup(lookup)?,
            provider: ProviderConfig::from_lookup(lookup)?,
            catalog: CatalogConfig::from_lookup(lookup)?,
        })
    }
}
