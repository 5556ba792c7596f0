use serde::Deserialize;

/// Structured style hints derived from a photo.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StyleData {
    pub style: String,
    pub colors: Vec<String>,
    pub interests: Vec<String>,
    pub age_range: String,
    pub gift_categories: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StyleAnalysis {
    pub analysis: String,
    #[serde(default)]
    pub style_data: StyleData,
}
