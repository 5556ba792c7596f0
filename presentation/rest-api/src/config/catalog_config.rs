use business::domain::catalog::filter::CaseSensitivity;

use super::env::{ConfigError, Lookup, flag_or};

/// Keyword matching settings
///
/// Environment variables:
/// - CATALOG_CASE_SENSITIVE: `true` uses LIKE, `false` uses ILIKE (default: false)
#[derive(Debug, Clone, Copy)]
pub struct CatalogConfig {
    pub case_sensitivity: CaseSensitivity,
}

impl CatalogConfig {
    pub fn from_lookup(lookup: Lookup) -> Result<Self, ConfigError> {
        let case_sensitive = flag_or(lookup, "CATALOG_CASE_SENSITIVE", false)?;
        Ok(Self {
            case_sensitivity: case_sensitive.into(),
        })
    }
}
