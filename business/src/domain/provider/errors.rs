/// Failures of the generative-language provider.
///
/// Every variant is absorbed by the fallback policy; none reaches the HTTP caller.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("provider.unexpected_status: {status} - {body}")]
    UnexpectedStatus { status: u16, body: String },
    #[error("provider.transport: {0}")]
    Transport(String),
    #[error("provider.invalid_response")]
    InvalidResponse,
}
