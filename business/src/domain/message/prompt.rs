use super::model::MessageRequest;

/// Number of card messages requested from the provider.
pub const MESSAGE_COUNT: usize = 3;

pub fn build_prompt(request: &MessageRequest) -> String {
    format!(
        "ギフトに添えるメッセージカード: 関係{}, 機会{}. {}トーンの短いメッセージを日本語で{}つ作成してください。各メッセージは30文字以内の1行にし、絵文字を1つ含めてください。番号や記号、説明文は付けず、メッセージだけを改行で区切って出力してください。",
        request.relationship,
        request.occasion,
        request.tone.prompt_label(),
        MESSAGE_COUNT
    )
}
