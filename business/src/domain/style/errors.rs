use crate::domain::provider::errors::ProviderError;

#[derive(Debug, thiserror::Error)]
pub enum StyleError {
    #[error("style.empty_image")]
    EmptyImage,
    #[error("style.invalid_image")]
    InvalidImage,
    #[error("style.invalid_analysis")]
    InvalidAnalysis,
    #[error(transparent)]
    Provider(#[from] ProviderError),
}
