use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use business::domain::style::model::{StyleAnalysis, StyleData};

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct AnalyzeStyleRequest {
    /// Base64 image, optionally as a `data:image/...;base64,` URL
    #[oai(default)]
    pub image: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct StyleDataResponse {
    pub style: String,
    pub colors: Vec<String>,
    pub interests: Vec<String>,
    pub age_range: String,
    pub gift_categories: Vec<String>,
}

impl From<StyleData> for StyleDataResponse {
    fn from(d: StyleData) -> Self {
        Self {
            style: d.style,
            colors: d.colors,
            interests: d.interests,
            age_range: d.age_range,
            gift_categories: d.gift_categories,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct StyleAnalysisResponse {
    /// Human-readable description of the style
    pub analysis: String,
    pub style_data: StyleDataResponse,
}

impl From<StyleAnalysis> for StyleAnalysisResponse {
    fn from(a: StyleAnalysis) -> Self {
        Self {
            analysis: a.analysis,
            style_data: a.style_data.into(),
        }
    }
}
