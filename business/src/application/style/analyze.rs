use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::provider::fallback::FallbackReason;
use crate::domain::provider::services::{GenerationRequest, TextGenerator};
use crate::domain::style::errors::StyleError;
use crate::domain::style::fallback::fallback_analysis;
use crate::domain::style::image::StyleImage;
use crate::domain::style::model::StyleAnalysis;
use crate::domain::style::prompt::{STYLE_PROMPT, parse_analysis};
use crate::domain::style::use_cases::analyze::{AnalyzeStyleParams, AnalyzeStyleUseCase};

pub struct AnalyzeStyleUseCaseImpl {
    pub generator: Option<Arc<dyn TextGenerator>>,
    pub logger: Arc<dyn Logger>,
}

impl AnalyzeStyleUseCaseImpl {
    async fn analyze(
        &self,
        generator: &dyn TextGenerator,
        image_base64: &str,
    ) -> Result<StyleAnalysis, StyleError> {
        let image = StyleImage::parse(image_base64)?;
        let request = GenerationRequest::text(STYLE_PROMPT).with_image(image.into());

        let content = generator
            .generate(&request)
            .await?
            .ok_or(StyleError::InvalidAnalysis)?;

        parse_analysis(&content)
    }
}

#[async_trait]
impl AnalyzeStyleUseCase for AnalyzeStyleUseCaseImpl {
    async fn execute(&self, params: AnalyzeStyleParams) -> StyleAnalysis {
        let Some(generator) = self.generator.as_deref() else {
            self.logger
                .warn("Gemini API key not configured, serving default style analysis");
            return fallback_analysis(FallbackReason::Unconfigured);
        };

        self.logger.info("Analyzing style image");

        match self.analyze(generator, &params.image_base64).await {
            Ok(analysis) => {
                self.logger.info(&format!(
                    "Style analyzed: {}",
                    analysis.style_data.style
                ));
                analysis
            }
            Err(err) => {
                self.logger
                    .error(&format!("Style analysis failed: {}", err));
                fallback_analysis(FallbackReason::ProviderFailed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::provider::errors::ProviderError;
    use crate::domain::style::fallback::{DEMO_ANALYSIS, ERROR_ANALYSIS, default_style_data};
    use mockall::mock;

    mock! {
        pub Generator {}

        #[async_trait]
        impl TextGenerator for Generator {
            async fn generate(
                &self,
                request: &GenerationRequest,
            ) -> Result<Option<String>, ProviderError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn use_case(generator: Option<MockGenerator>) -> AnalyzeStyleUseCaseImpl {
        AnalyzeStyleUseCaseImpl {
            generator: generator.map(|g| Arc::new(g) as Arc<dyn TextGenerator>),
            logger: mock_logger(),
        }
    }

    fn params(image: &str) -> AnalyzeStyleParams {
        AnalyzeStyleParams {
            image_base64: image.to_string(),
        }
    }

    #[tokio::test]
    async fn should_send_image_inline_and_parse_analysis() {
        let mut generator = MockGenerator::new();
        generator
            .expect_generate()
            .withf(|request| {
                request.prompt == STYLE_PROMPT
                    && request
                        .image
                        .as_ref()
                        .is_some_and(|i| i.mime_type == "image/png" && i.data == "aGVsbG8=")
            })
            .times(1)
            .returning(|_| {
                Ok(Some(
                    r#"{"analysis":"カジュアル","style_data":{"style":"カジュアル","colors":["グレー"],"interests":["アウトドア"],"age_range":"20代","gift_categories":["バッグ"]}}"#
                        .to_string(),
                ))
            });

        let analysis = use_case(Some(generator))
            .execute(params("data:image/png;base64,aGVsbG8="))
            .await;

        assert_eq!(analysis.analysis, "カジュアル");
        assert_eq!(analysis.style_data.interests, vec!["アウトドア"]);
    }

    #[tokio::test]
    async fn should_serve_demo_analysis_when_unconfigured() {
        let analysis = use_case(None).execute(params("aGVsbG8=")).await;

        assert_eq!(analysis.analysis, DEMO_ANALYSIS);
        assert_eq!(analysis.style_data, default_style_data());
    }

    #[tokio::test]
    async fn should_skip_provider_for_invalid_image() {
        let mut generator = MockGenerator::new();
        generator.expect_generate().never();

        let analysis = use_case(Some(generator)).execute(params("%%%")).await;

        assert_eq!(analysis.analysis, ERROR_ANALYSIS);
    }

    #[tokio::test]
    async fn should_serve_error_analysis_when_provider_fails() {
        let mut generator = MockGenerator::new();
        generator.expect_generate().returning(|_| {
            Err(ProviderError::UnexpectedStatus {
                status: 500,
                body: "internal".to_string(),
            })
        });

        let analysis = use_case(Some(generator)).execute(params("aGVsbG8=")).await;

        assert_eq!(analysis.analysis, ERROR_ANALYSIS);
        assert_eq!(analysis.style_data.style, "モダン");
    }

    #[tokio::test]
    async fn should_serve_error_analysis_when_output_is_not_json() {
        let mut generator = MockGenerator::new();
        generator
            .expect_generate()
            .returning(|_| Ok(Some("素敵なスタイルです".to_string())));

        let analysis = use_case(Some(generator)).execute(params("aGVsbG8=")).await;

        assert_eq!(analysis.analysis, ERROR_ANALYSIS);
    }
}
