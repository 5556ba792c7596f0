use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::matcher::ProductMatcher;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::provider::errors::ProviderError;
use crate::domain::provider::fallback::FallbackReason;
use crate::domain::provider::services::{GenerationRequest, TextGenerator};
use crate::domain::suggestion::errors::SuggestionError;
use crate::domain::suggestion::fallback::{NO_SUGGESTIONS_PLACEHOLDER, fallback_suggestions};
use crate::domain::suggestion::keywords::extract_keywords;
use crate::domain::suggestion::model::{SuggestionRequest, SuggestionResult};
use crate::domain::suggestion::prompt::build_prompt;
use crate::domain::suggestion::use_cases::suggest::SuggestGiftsUseCase;

/// Gift-suggestion pipeline.
///
/// `generator` is `None` when no provider credential is configured; the
/// pipeline then serves demo output without any outbound call. Provider
/// failures are logged and replaced by canned output. Only a catalog failure
/// while serving that fallback is returned as an error.
pub struct SuggestGiftsUseCaseImpl {
    pub generator: Option<Arc<dyn TextGenerator>>,
    pub matcher: ProductMatcher,
    pub logger: Arc<dyn Logger>,
}

impl SuggestGiftsUseCaseImpl {
    async fn generate(
        &self,
        generator: &dyn TextGenerator,
        request: &SuggestionRequest,
    ) -> Result<SuggestionResult, PipelineError> {
        let prompt = build_prompt(request);
        let suggestions = generator
            .generate(&GenerationRequest::text(prompt))
            .await?
            .unwrap_or_else(|| NO_SUGGESTIONS_PLACEHOLDER.to_string());

        let keywords = extract_keywords(&suggestions);
        self.logger
            .debug(&format!("Extracted {} keywords", keywords.len()));

        let products = self.matcher.find(&keywords).await?;

        Ok(SuggestionResult::assemble(suggestions, products))
    }

    async fn fallback(&self, reason: FallbackReason) -> Result<SuggestionResult, SuggestionError> {
        let products = self.matcher.first().await?;
        self.logger.info(&format!(
            "Serving fallback suggestions ({}) with {} products",
            reason,
            products.len()
        ));
        Ok(SuggestionResult::assemble(fallback_suggestions(reason), products))
    }
}

#[derive(Debug, thiserror::Error)]
enum PipelineError {
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error("catalog search failed: {0}")]
    Catalog(#[from] RepositoryError),
}

#[async_trait]
impl SuggestGiftsUseCase for SuggestGiftsUseCaseImpl {
    async fn execute(
        &self,
        request: SuggestionRequest,
    ) -> Result<SuggestionResult, SuggestionError> {
        let Some(generator) = self.generator.as_deref() else {
            self.logger
                .warn("Gemini API key not configured, serving demo suggestions");
            return self.fallback(FallbackReason::Unconfigured).await;
        };

        match self.generate(generator, &request).await {
            Ok(result) => {
                self.logger.info(&format!(
                    "Generated suggestions with {} matching products",
                    result.products.len()
                ));
                Ok(result)
            }
            Err(err) => {
                self.logger.error(&format!("Gemini API error: {}", err));
                self.fallback(FallbackReason::ProviderFailed).await
            }
        }
    }
}
