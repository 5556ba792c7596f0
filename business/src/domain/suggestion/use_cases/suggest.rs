use async_trait::async_trait;

use crate::domain::suggestion::errors::SuggestionError;
use crate::domain::suggestion::model::{SuggestionRequest, SuggestionResult};

#[async_trait]
pub trait SuggestGiftsUseCase: Send + Sync {
    async fn execute(
        &self,
        request: SuggestionRequest,
    ) -> Result<SuggestionResult, SuggestionError>;
}
