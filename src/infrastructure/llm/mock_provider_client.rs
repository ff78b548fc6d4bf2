use async_trait::async_trait;

use crate::application::ports::{ProviderClient, ProviderError, ProviderErrorKind};
use crate::domain::AiProvider;

/// Scripted provider used in tests and scaffold mode: answers with a fixed
/// string or fails with a fixed error kind.
pub struct MockProviderClient {
    provider: AiProvider,
    outcome: Result<String, ProviderErrorKind>,
}

impl MockProviderClient {
    pub fn answering(provider: AiProvider, answer: impl Into<String>) -> Self {
        Self {
            provider,
            outcome: Ok(answer.into()),
        }
    }

    pub fn failing(provider: AiProvider, kind: ProviderErrorKind) -> Self {
        Self {
            provider,
            outcome: Err(kind),
        }
    }
}

#[async_trait]
impl ProviderClient for MockProviderClient {
    async fn generate(&self, _prompt: &str) -> Result<String, ProviderError> {
        match &self.outcome {
            Ok(answer) => Ok(answer.clone()),
            Err(kind) => Err(ProviderError::new(
                self.provider,
                *kind,
                "scripted failure",
            )),
        }
    }
}
