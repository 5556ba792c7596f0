pub mod app_config;
pub mod catalog_config;
pub mod cors_config;
pub mod database_config;
pub mod env;
pub mod provider_config;
pub mod server_config;
