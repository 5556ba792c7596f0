use std::time::Duration;

use gemini::client::{DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiConfig};

use super::env::{ConfigError, Lookup, parse_or, string_or};

/// Configuration for Gemini API access.
///
/// Environment variables:
/// - GEMINI_API_KEY: API key; absent or blank switches every endpoint to demo output
/// - GEMINI_MODEL: model id (default: "gemini-3-flash-preview")
/// - GEMINI_BASE_URL: API root (default: Google's v1beta endpoint)
/// - GEMINI_TIMEOUT_SECS: per-call timeout in seconds (default: 30)
#[derive(Clone)]
pub struct ProviderConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl ProviderConfig {
    pub fn from_lookup(lookup: Lookup) -> Result<Self, ConfigError> {
        let api_key = lookup("GEMINI_API_KEY")
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());
        let timeout_secs: u64 = parse_or(lookup, "GEMINI_TIMEOUT_SECS", 30)?;
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                name: "GEMINI_TIMEOUT_SECS",
                value: "0".to_string(),
            });
        }

        Ok(Self {
            api_key,
            model: string_or(lookup, "GEMINI_MODEL", DEFAULT_MODEL),
            base_url: string_or(lookup, "GEMINI_BASE_URL", DEFAULT_BASE_URL),
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Client settings, or `None` when no credential is configured.
    pub fn gemini(&self) -> Option<GeminiConfig> {
        self.api_key.as_ref().map(|key| {
            GeminiConfig::new(key.clone())
                .with_model(self.model.clone())
                .with_base_url(self.base_url.clone())
                .with_timeout(self.timeout)
        })
    }
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::env::map_lookup;

    #[test]
    fn should_treat_blank_key_as_unconfigured() {
        let config = ProviderConfig::from_lookup(&map_lookup(&[("GEMINI_API_KEY", "  ")])).unwrap();

        assert!(config.api_key.is_none());
        assert!(config.gemini().is_none());
    }

    #[test]
    fn should_build_gemini_config_when_key_present() {
        let config = ProviderConfig::from_lookup(&map_lookup(&[
            ("GEMINI_API_KEY", "secret"),
            ("GEMINI_MODEL", "gemini-test"),
            ("GEMINI_TIMEOUT_SECS", "10"),
        ]))
        .unwrap();

        let gemini = config.gemini().unwrap();
        assert_eq!(gemini.api_key, "secret");
        assert_eq!(gemini.model, "gemini-test");
        assert_eq!(gemini.base_url, DEFAULT_BASE_URL);
        assert_eq!(gemini.timeout, Duration::from_secs(10));
    }

    #[test]
    fn should_reject_zero_timeout() {
        let result = ProviderConfig::from_lookup(&map_lookup(&[("GEMINI_TIMEOUT_SECS", "0")]));
        assert!(result.is_err());
    }

    #[test]
    fn should_not_leak_key_in_debug_output() {
        let config = ProviderConfig::from_lookup(&map_lookup(&[("GEMINI_API_KEY", "secret")])).unwrap();
        assert!(!format!("{:?}", config).contains("secret"));
    }
}
