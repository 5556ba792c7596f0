use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::message::fallback::fallback_messages;
use crate::domain::message::model::{MessageRequest, MessageResult};
use crate::domain::message::parser::parse_messages;
use crate::domain::message::prompt::build_prompt;
use crate::domain::message::use_cases::generate::GenerateMessagesUseCase;
use crate::domain::provider::services::{GenerationRequest, TextGenerator};

pub struct GenerateMessagesUseCaseImpl {
    pub generator: Option<Arc<dyn TextGenerator>>,
    pub logger: Arc<dyn Logger>,
}

impl GenerateMessagesUseCaseImpl {
    fn fallback(&self, request: &MessageRequest) -> MessageResult {
        MessageResult {
            messages: fallback_messages(request.tone),
        }
    }
}

#[async_trait]
impl GenerateMessagesUseCase for GenerateMessagesUseCaseImpl {
    async fn execute(&self, request: MessageRequest) -> MessageResult {
        let Some(generator) = self.generator.as_deref() else {
            self.logger
                .warn("Gemini API key not configured, serving fallback messages");
            return self.fallback(&request);
        };

        self.logger
            .info(&format!("Generating {} card messages", request.tone));

        let prompt = build_prompt(&request);
        match generator.generate(&GenerationRequest::text(prompt)).await {
            Ok(text) => {
                let messages = text.as_deref().map(parse_messages).unwrap_or_default();
                if messages.is_empty() {
                    self.logger
                        .warn("Gemini returned no usable messages, serving fallback");
                    return self.fallback(&request);
                }
                MessageResult { messages }
            }
            Err(err) => {
                self.logger.error(&format!("Gemini API error: {}", err));
                self.fallback(&request)
            }
        }
    }
}
