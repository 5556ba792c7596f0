/// Why a provider-backed operation degraded to fixed output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    /// Pre-call: no credential is configured, the provider was never contacted.
    Unconfigured,
    /// Post-call: the call failed or its output could not be used.
    ProviderFailed,
}

impl std::fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FallbackReason::Unconfigured => write!(f, "unconfigured"),
            FallbackReason::ProviderFailed => write!(f, "provider_failed"),
        }
    }
}
