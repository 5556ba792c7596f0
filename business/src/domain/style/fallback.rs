use crate::domain::provider::fallback::FallbackReason;

use super::model::{StyleAnalysis, StyleData};

pub const DEMO_ANALYSIS: &str =
    "デモモード: APIキーが設定されていないため、デフォルトのスタイル分析を表示しています。";

pub const ERROR_ANALYSIS: &str =
    "画像分析中にエラーが発生しました。デフォルト設定で続行します。";

pub fn default_style_data() -> StyleData {
    StyleData {
        style: "モダン".to_string(),
        colors: vec!["ブルー".to_string(), "ホワイト".to_string()],
        interests: vec!["ファッション".to_string(), "ライフスタイル".to_string()],
        age_range: "20-30代".to_string(),
        gift_categories: vec![
            "アクセサリー".to_string(),
            "ファッション小物".to_string(),
            "ライフスタイルグッズ".to_string(),
        ],
    }
}

pub fn fallback_analysis(reason: FallbackReason) -> StyleAnalysis {
    let analysis = match reason {
        FallbackReason::Unconfigured => DEMO_ANALYSIS,
        FallbackReason::ProviderFailed => ERROR_ANALYSIS,
    };
    StyleAnalysis {
        analysis: analysis.to_string(),
        style_data: default_style_data(),
    }
}
