use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::{Value, json};

use business::domain::provider::errors::ProviderError;
use business::domain::provider::services::{GenerationRequest, TextGenerator};

use crate::client::{API_KEY_HEADER, GeminiClient};

pub struct GeminiTextGenerator {
    client: GeminiClient,
}

impl GeminiTextGenerator {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    fn build_body(request: &GenerationRequest) -> Value {
        let mut parts = vec![json!({ "text": request.prompt })];
        if let Some(image) = &request.image {
            parts.push(json!({
                "inline_data": {
                    "mime_type": image.mime_type,
                    "data": image.data,
                }
            }));
        }

        json!({
            "contents": [{ "parts": parts }]
        })
    }

    /// Reads `candidates[0].content.parts[0].text`; any missing segment yields `None`.
    fn extract_text(data: &Value) -> Option<String> {
        data["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .map(|text| text.to_string())
    }
}

#[async_trait]
impl TextGenerator for GeminiTextGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<Option<String>, ProviderError> {
        let body = Self::build_body(request);

        let response = self
            .client
            .client
            .post(self.client.generate_content_url())
            .header("Content-Type", "application/json")
            .header(API_KEY_HEADER, &self.client.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|err| ProviderError::Transport(err.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        let data: Value = response
            .json()
            .await
            .map_err(|_| ProviderError::InvalidResponse)?;

        Ok(Self::extract_text(&data))
    }
}
