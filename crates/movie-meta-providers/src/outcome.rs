use serde::{Deserialize, Serialize};

/// Tagged result of one gateway call.
///
/// Every transport failure is converted to a value at the gateway
/// boundary; callers never see a raw `reqwest::Error`. Outcomes are
/// serde-serializable so the cache can store failures transparently
/// alongside successes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ProviderOutcome<T> {
    Success(T),
    /// Well-formed "no match" response from the provider.
    NotFound,
    /// The per-operation deadline elapsed before the provider answered.
    Timeout,
    /// Any other transport-level failure, detail preserved for display.
    NetworkError(String),
}

impl<T> ProviderOutcome<T> {
    /// Classify a reqwest error into `Timeout` or `NetworkError`.
    pub fn from_transport_error(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            ProviderOutcome::Timeout
        } else {
            ProviderOutcome::NetworkError(err.to_string())
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ProviderOutcome::Success(_))
    }

    /// Extract the payload, discarding failure detail.
    pub fn into_success(self) -> Option<T> {
        match self {
            ProviderOutcome::Success(payload) => Some(payload),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ProviderOutcome<U> {
        match self {
            ProviderOutcome::Success(payload) => ProviderOutcome::Success(f(payload)),
            ProviderOutcome::NotFound => ProviderOutcome::NotFound,
            ProviderOutcome::Timeout => ProviderOutcome::Timeout,
            ProviderOutcome::NetworkError(detail) => ProviderOutcome::NetworkError(detail),
        }
    }
}
