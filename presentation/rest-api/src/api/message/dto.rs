use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::message::model::{MessageResult, Tone};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Enum)]
pub enum ToneDto {
    #[oai(rename = "emotional")]
    Emotional,
    #[oai(rename = "funny")]
    Funny,
    #[oai(rename = "formal")]
    Formal,
}

impl From<ToneDto> for Tone {
    fn from(t: ToneDto) -> Self {
        match t {
            ToneDto::Emotional => Tone::Emotional,
            ToneDto::Funny => Tone::Funny,
            ToneDto::Formal => Tone::Formal,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct MessageResponse {
    /// Short card messages, three when the fallback is served
    pub messages: Vec<String>,
}

impl From<MessageResult> for MessageResponse {
    fn from(r: MessageResult) -> Self {
        Self {
            messages: r.messages,
        }
    }
}
