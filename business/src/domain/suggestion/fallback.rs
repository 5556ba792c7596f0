use crate::domain::provider::fallback::FallbackReason;

/// Served when no provider credential is configured.
pub const DEMO_SUGGESTIONS: &str =
    "デモモード: APIキーが設定されていないため、サンプル提案を表示しています。";

/// Served when the provider call fails for any reason.
pub const CANNED_SUGGESTIONS: &str = "申し訳ございません。APIの利用制限を超えました。デモモードで表示しています。\n\n🎁 おすすめギフト（サンプル）:\n1. 📚 書籍ギフトカード - 読書好きに最適\n2. ☕ カフェギフト券 - リラックスタイムに\n3. 🎨 文房具セット - クリエイティブな趣味に\n4. 🌸 アロマセット - 癒しのプレゼント\n5. 🍰 スイーツギフト - 特別な日に";

/// Used as the suggestion text when the provider response carries none.
pub const NO_SUGGESTIONS_PLACEHOLDER: &str = "No suggestions generated";

/// Suggestion text served for each fallback reason.
pub fn fallback_suggestions(reason: FallbackReason) -> &'static str {
    match reason {
        FallbackReason::Unconfigured => DEMO_SUGGESTIONS,
        FallbackReason::ProviderFailed => CANNED_SUGGESTIONS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_pick_text_per_reason() {
        assert_eq!(
            fallback_suggestions(FallbackReason::Unconfigured),
            DEMO_SUGGESTIONS
        );
        assert_eq!(
            fallback_suggestions(FallbackReason::ProviderFailed),
            CANNED_SUGGESTIONS
        );
    }

    #[test]
    fn should_list_five_canned_gifts() {
        let items = CANNED_SUGGESTIONS
            .lines()
            .filter(|line| line.starts_with(|c: char| c.is_ascii_digit()))
            .count();
        assert_eq!(items, 5);
    }
}
