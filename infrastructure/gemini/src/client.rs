use std::time::Duration;

use reqwest::Client;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Header carrying the API key, kept out of the URL so it never shows up in logs.
pub const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Debug, thiserror::Error)]
pub enum GeminiClientError {
    #[error("gemini.invalid_endpoint")]
    InvalidEndpoint(#[from] url::ParseError),
    #[error("gemini.http_client")]
    HttpClient(#[from] reqwest::Error),
}

/// Connection settings for the Gemini `generateContent` API.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Shared Gemini HTTP client.
pub struct GeminiClient {
    pub client: Client,
    pub api_key: String,
    endpoint: Url,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, GeminiClientError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        let endpoint = Url::parse(&format!(
            "{}/models/{}:generateContent",
            config.base_url.trim_end_matches('/'),
            config.model
        ))?;

        Ok(Self {
            client,
            api_key: config.api_key,
            endpoint,
        })
    }

    /// Returns the `generateContent` endpoint URL.
    pub fn generate_content_url(&self) -> Url {
        self.endpoint.clone()
    }
}
