use std::sync::LazyLock;

use regex::Regex;

use super::errors::StyleError;
use super::model::StyleAnalysis;

pub const STYLE_PROMPT: &str = r#"この写真の人物のファッションや持ち物からスタイルを分析し、ギフト選びのヒントを日本語で作成してください。
次の構造のJSONオブジェクトのみを返してください。説明文やコードブロックは不要です。
{
  "analysis": "スタイルの簡単な説明（2〜3文）",
  "style_data": {
    "style": "スタイル名（例: モダン、カジュアル、ナチュラル）",
    "colors": ["好みの色"],
    "interests": ["推測される興味"],
    "age_range": "推定年代（例: 20-30代）",
    "gift_categories": ["おすすめのギフトカテゴリ"]
  }
}"#;

static JSON_OBJECT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[\s\S]*\}").expect("JSON object pattern is a valid regex"));

/// Extracts the first-to-last brace span from provider text and decodes it.
pub fn parse_analysis(content: &str) -> Result<StyleAnalysis, StyleError> {
    let json_str = JSON_OBJECT
        .find(content)
        .map(|m| m.as_str())
        .ok_or(StyleError::InvalidAnalysis)?;

    let analysis: StyleAnalysis =
        serde_json::from_str(json_str).map_err(|_| StyleError::InvalidAnalysis)?;

    if analysis.analysis.trim().is_empty() {
        return Err(StyleError::InvalidAnalysis);
    }

    Ok(analysis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_json_wrapped_in_code_block() {
        let content = "```json\n{\"analysis\":\"落ち着いた雰囲気\",\"style_data\":{\"style\":\"ナチュラル\",\"colors\":[\"ベージュ\"],\"interests\":[\"カフェ\"],\"age_range\":\"30代\",\"gift_categories\":[\"雑貨\"]}}\n```";

        let analysis = parse_analysis(content).unwrap();

        assert_eq!(analysis.analysis, "落ち着いた雰囲気");
        assert_eq!(analysis.style_data.style, "ナチュラル");
        assert_eq!(analysis.style_data.colors, vec!["ベージュ"]);
        assert_eq!(analysis.style_data.gift_categories, vec!["雑貨"]);
    }

    #[test]
    fn should_default_missing_style_fields() {
        let analysis = parse_analysis(r#"{"analysis":"シンプル"}"#).unwrap();

        assert_eq!(analysis.analysis, "シンプル");
        assert!(analysis.style_data.colors.is_empty());
        assert_eq!(analysis.style_data.age_range, "");
    }

    #[test]
    fn should_reject_text_without_json() {
        assert!(matches!(
            parse_analysis("分析できませんでした"),
            Err(StyleError::InvalidAnalysis)
        ));
    }

    #[test]
    fn should_reject_blank_analysis() {
        assert!(matches!(
            parse_analysis(r#"{"analysis":"  "}"#),
            Err(StyleError::InvalidAnalysis)
        ));
    }
}
