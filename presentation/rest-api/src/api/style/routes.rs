use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::style::use_cases::analyze::{AnalyzeStyleParams, AnalyzeStyleUseCase};

use crate::api::style::dto::{AnalyzeStyleRequest, StyleAnalysisResponse};
use crate::api::tags::ApiTags;

pub struct StyleApi {
    analyze_use_case: Arc<dyn AnalyzeStyleUseCase>,
}

impl StyleApi {
    pub fn new(analyze_use_case: Arc<dyn AnalyzeStyleUseCase>) -> Self {
        Self { analyze_use_case }
    }
}

/// Style analysis API
#[OpenApi]
impl StyleApi {
    /// Analyze a style photo
    ///
    /// Describes the style shown in a photo and derives gift hints from it.
    /// Always answers 200; when analysis is impossible the default style data
    /// is returned with an explanatory message.
    #[oai(path = "/api/analyze_style", method = "post", tag = "ApiTags::Style")]
    async fn analyze_style(&self, body: Json<AnalyzeStyleRequest>) -> Json<StyleAnalysisResponse> {
        let params = AnalyzeStyleParams {
            image_base64: body.0.image,
        };

        Json(self.analyze_use_case.execute(params).await.into())
    }
}
