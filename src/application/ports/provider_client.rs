use async_trait::async_trait;
use std::fmt;

use crate::domain::AiProvider;

/// Uniform generate-text contract over one external LLM provider.
///
/// Implementations perform exactly one outbound call per invocation and
/// classify failures into [`ProviderErrorKind`] at the source. Retry and
/// fallback decisions belong to the orchestrator, never to the adapter.
#[async_trait]
pub trait ProviderClient: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderErrorKind {
    /// Required credential absent; no network call was made.
    NotConfigured,
    Auth,
    RateLimited,
    MalformedResponse,
    Network,
    Unknown,
}

impl ProviderErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderErrorKind::NotConfigured => "not_configured",
            ProviderErrorKind::Auth => "auth",
            ProviderErrorKind::RateLimited => "rate_limited",
            ProviderErrorKind::MalformedResponse => "malformed_response",
            ProviderErrorKind::Network => "network",
            ProviderErrorKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ProviderErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("{provider} provider error ({kind}): {message}")]
pub struct ProviderError {
    pub provider: AiProvider,
    pub kind: ProviderErrorKind,
    pub message: String,
}

impl ProviderError {
    pub fn new(provider: AiProvider, kind: ProviderErrorKind, message: impl Into<String>) -> Self {
        Self {
            provider,
            kind,
            message: message.into(),
        }
    }

    pub fn not_configured(provider: AiProvider) -> Self {
        Self::new(
            provider,
            ProviderErrorKind::NotConfigured,
            format!("API key for {} is not configured", provider.display_name()),
        )
    }
}
