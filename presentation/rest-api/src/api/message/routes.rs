use std::sync::Arc;

use poem_openapi::{OpenApi, param::Query, payload::Json};

use business::domain::message::model::{MessageRequest, Tone};
use business::domain::message::use_cases::generate::GenerateMessagesUseCase;

use crate::api::message::dto::MessageResponse;
use crate::api::tags::ApiTags;

pub struct MessageApi {
    generate_use_case: Arc<dyn GenerateMessagesUseCase>,
}

impl MessageApi {
    pub fn new(generate_use_case: Arc<dyn GenerateMessagesUseCase>) -> Self {
        Self { generate_use_case }
    }
}

/// Message card API
#[OpenApi]
impl MessageApi {
    /// Generate card messages
    ///
    /// Returns short messages to write on a gift card. Unknown or missing
    /// tones fall back to `emotional`.
    #[oai(path = "/api/message", method = "get", tag = "ApiTags::Messages")]
    async fn generate_messages(
        &self,
        /// emotional, funny or formal
        tone: Query<Option<String>>,
        relationship: Query<Option<String>>,
        occasion: Query<Option<String>>,
    ) -> Json<MessageResponse> {
        let tone = tone
            .0
            .and_then(|t| t.trim().parse::<Tone>().ok())
            .unwrap_or_default();
        let request = MessageRequest {
            tone,
            relationship: relationship.0.unwrap_or_default(),
            occasion: occasion.0.unwrap_or_default(),
        };

        Json(self.generate_use_case.execute(request).await.into())
    }
}
