use super::model::Tone;

/// Fixed card messages served when the provider is unconfigured or fails.
pub fn fallback_messages(tone: Tone) -> Vec<String> {
    let messages: [&str; 3] = match tone {
        Tone::Emotional => [
            "いつもありがとう、心から感謝💖",
            "あなたに出会えて幸せです✨",
            "特別なあなたへ、愛を込めて🌸",
        ],
        Tone::Funny => [
            "また一つ歳とったね😂🎂",
            "いつも笑わせてくれてサンキュー🤣",
            "プレゼントより私が最高のギフト！😎",
        ],
        Tone::Formal => [
            "心よりお祝い申し上げます🎊",
            "ご健勝をお祈りいたします🙏",
            "日頃の感謝を込めて贈ります✨",
        ],
    };
    messages.iter().map(|m| m.to_string()).collect()
}
