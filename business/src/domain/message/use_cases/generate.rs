use async_trait::async_trait;

use crate::domain::message::model::{MessageRequest, MessageResult};

/// Message generation never fails: provider problems degrade to the fixed
/// per-tone list.
#[async_trait]
pub trait GenerateMessagesUseCase: Send + Sync {
    async fn execute(&self, request: MessageRequest) -> MessageResult;
}
