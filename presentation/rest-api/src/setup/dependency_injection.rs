use std::sync::Arc;

use logger::TracingLogger;
use persistence::catalog::repository::ProductCatalogPostgres;

use gemini::client::GeminiClient;
use gemini::text_generator::GeminiTextGenerator;

use business::application::message::generate::GenerateMessagesUseCaseImpl;
use business::application::style::analyze::AnalyzeStyleUseCaseImpl;
use business::application::suggestion::suggest::SuggestGiftsUseCaseImpl;
use business::domain::catalog::matcher::ProductMatcher;
use business::domain::provider::services::TextGenerator;

use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub suggestion_api: crate::api::suggestion::routes::SuggestionApi,
    pub message_api: crate::api::message::routes::MessageApi,
    pub style_api: crate::api::style::routes::StyleApi,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig, pool: sqlx::PgPool) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let catalog = Arc::new(ProductCatalogPostgres::new(pool));

        let generator: Option<Arc<dyn TextGenerator>> = match config.provider.gemini() {
            Some(gemini_config) => {
                let client = GeminiClient::new(gemini_config)?;
                let generator: Arc<dyn TextGenerator> = Arc::new(GeminiTextGenerator::new(client));
                Some(generator)
            }
            None => {
                tracing::warn!("GEMINI_API_KEY is not set, serving demo responses");
                None
            }
        };

        let suggest_use_case = Arc::new(SuggestGiftsUseCaseImpl {
            generator: generator.clone(),
            matcher: ProductMatcher::new(catalog, config.catalog.case_sensitivity),
            logger: logger.clone(),
        });
        let generate_messages_use_case = Arc::new(GenerateMessagesUseCaseImpl {
            generator: generator.clone(),
            logger: logger.clone(),
        });
        let analyze_style_use_case = Arc::new(AnalyzeStyleUseCaseImpl { generator, logger });

        let suggestion_api =
            crate::api::suggestion::routes::SuggestionApi::new(suggest_use_case);
        let message_api =
            crate::api::message::routes::MessageApi::new(generate_messages_use_case);
        let style_api = crate::api::style::routes::StyleApi::new(analyze_style_use_case);

        Ok(Self {
            health_api,
            suggestion_api,
            message_api,
            style_api,
        })
    }
}
