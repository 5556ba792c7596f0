use async_trait::async_trait;

use super::errors::ProviderError;

/// Base64 image payload sent inline with a prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct InlineImage {
    pub mime_type: String,
    pub data: String,
}

/// A single text-completion request.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub image: Option<InlineImage>,
}

impl GenerationRequest {
    pub fn text(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            image: None,
        }
    }

    pub fn with_image(mut self, image: InlineImage) -> Self {
        self.image = Some(image);
        self
    }
}

/// Service port for the generative-language provider.
///
/// Implementations make exactly one outbound call per invocation, with no
/// retries and no caching. `Ok(None)` means the provider answered but the
/// response carried no text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<Option<String>, ProviderError>;
}
