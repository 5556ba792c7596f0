use async_trait::async_trait;

use crate::domain::style::model::StyleAnalysis;

pub struct AnalyzeStyleParams {
    pub image_base64: String,
}

/// Style analysis never fails: every problem degrades to the default style data.
#[async_trait]
pub trait AnalyzeStyleUseCase: Send + Sync {
    async fn execute(&self, params: AnalyzeStyleParams) -> StyleAnalysis;
}
