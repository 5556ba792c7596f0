use std::sync::Arc;

use poem_openapi::{OpenApi, param::Query, payload::Json};

use business::domain::suggestion::model::SuggestionRequest;
use business::domain::suggestion::use_cases::suggest::SuggestGiftsUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::suggestion::dto::SuggestionResponse;
use crate::api::tags::ApiTags;

pub struct SuggestionApi {
    suggest_use_case: Arc<dyn SuggestGiftsUseCase>,
}

impl SuggestionApi {
    pub fn new(suggest_use_case: Arc<dyn SuggestGiftsUseCase>) -> Self {
        Self { suggest_use_case }
    }
}

/// Suggestion API
///
/// Turns quiz answers into gift ideas and matching catalog products.
#[OpenApi]
impl SuggestionApi {
    /// Suggest gifts
    ///
    /// Every answer is optional free text. Without a configured provider, or
    /// when the provider fails, canned suggestions are returned with the first
    /// catalog products. Fails only when the catalog cannot be read.
    #[oai(path = "/api/suggest", method = "get", tag = "ApiTags::Suggestions")]
    async fn suggest(
        &self,
        age: Query<Option<String>>,
        gender: Query<Option<String>>,
        relationship: Query<Option<String>>,
        hobby: Query<Option<String>>,
        /// Budget in yen
        budget: Query<Option<String>>,
        occasion: Query<Option<String>>,
        /// JSON style data returned by `/api/analyze_style`
        style_analysis: Query<Option<String>>,
    ) -> SuggestResponse {
        let request = SuggestionRequest {
            age: age.0.unwrap_or_default(),
            gender: gender.0.unwrap_or_default(),
            relationship: relationship.0.unwrap_or_default(),
            hobby: hobby.0.unwrap_or_default(),
            budget: budget.0.unwrap_or_default(),
            occasion: occasion.0.unwrap_or_default(),
            style_analysis: style_analysis.0,
        };

        match self.suggest_use_case.execute(request).await {
            Ok(result) => SuggestResponse::Ok(Json(result.into())),
            Err(err) => {
                let (_, json) = err.into_error_response();
                SuggestResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum SuggestResponse {
    #[oai(status = 200)]
    Ok(Json<SuggestionResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
