use super::model::SuggestionRequest;

const INSTRUCTIONS: &str = "日本語で提案してください。提案は5つ以下にし、各ギフトに簡単な説明と、Amazon.co.jpでその商品を購入するための実際の検索URLを追加してください。URLは「https://www.amazon.co.jp/s?k=商品名」の形式にしてください。";

/// Renders quiz answers into the gift-suggestion prompt.
///
/// Values are interpolated verbatim in a fixed order; user text is neither
/// escaped nor truncated.
pub fn build_prompt(request: &SuggestionRequest) -> String {
    let mut prompt = format!(
        "おすすめギフト: 年齢{}, 性別{}, 関係{}, 趣味{}, 予算{}¥, 機会{}. ",
        request.age,
        request.gender,
        request.relationship,
        request.hobby,
        request.budget,
        request.occasion
    );

    if let Some(style) = request
        .style_analysis
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
    {
        prompt.push_str(&format!("スタイル分析{}. ", style));
    }

    prompt.push_str(INSTRUCTIONS);
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiz() -> SuggestionRequest {
        SuggestionRequest {
            age: "30".to_string(),
            gender: "男性".to_string(),
            relationship: "友達".to_string(),
            hobby: "読書".to_string(),
            budget: "5000".to_string(),
            occasion: "誕生日".to_string(),
            style_analysis: None,
        }
    }

    #[test]
    fn should_interpolate_fields_in_fixed_order() {
        let prompt = build_prompt(&quiz());

        assert_eq!(
            prompt,
            "おすすめギフト: 年齢30, 性別男性, 関係友達, 趣味読書, 予算5000¥, 機会誕生日. 日本語で提案してください。提案は5つ以下にし、各ギフトに簡単な説明と、Amazon.co.jpでその商品を購入するための実際の検索URLを追加してください。URLは「https://www.amazon.co.jp/s?k=商品名」の形式にしてください。"
        );
    }

    #[test]
    fn should_render_absent_fields_as_empty() {
        let prompt = build_prompt(&SuggestionRequest::default());

        assert!(prompt.starts_with("おすすめギフト: 年齢, 性別, 関係, 趣味, 予算¥, 機会. "));
    }

    #[test]
    fn should_insert_user_text_verbatim() {
        let request = SuggestionRequest {
            hobby: "\"}; DROP TABLE products; --".to_string(),
            ..quiz()
        };

        let prompt = build_prompt(&request);

        assert!(prompt.contains("趣味\"}; DROP TABLE products; --, "));
    }

    #[test]
    fn should_mention_suggestion_cap_and_marketplace_url() {
        let prompt = build_prompt(&quiz());

        assert!(prompt.contains("提案は5つ以下"));
        assert!(prompt.contains("https://www.amazon.co.jp/s?k=商品名"));
    }

    #[test]
    fn should_include_style_analysis_before_instructions() {
        let request = SuggestionRequest {
            style_analysis: Some(r#"{"style":"モダン"}"#.to_string()),
            ..quiz()
        };

        let prompt = build_prompt(&request);

        assert!(prompt.contains(r#"機会誕生日. スタイル分析{"style":"モダン"}. 日本語で"#));
    }

    #[test]
    fn should_ignore_blank_style_analysis() {
        let request = SuggestionRequest {
            style_analysis: Some("   ".to_string()),
            ..quiz()
        };

        assert_eq!(build_prompt(&request), build_prompt(&quiz()));
    }
}
