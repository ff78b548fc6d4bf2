use std::sync::Arc;

use crate::application::ports::ProviderClient;
use crate::domain::AiProvider;

/// One stateless client per provider, constructed once at startup and
/// reused across requests.
#[derive(Clone)]
pub struct ProviderRegistry {
    gemini: Arc<dyn ProviderClient>,
    openai: Arc<dyn ProviderClient>,
    deepseek: Arc<dyn ProviderClient>,
}

impl ProviderRegistry {
    pub fn new(
        gemini: Arc<dyn ProviderClient>,
        openai: Arc<dyn ProviderClient>,
        deepseek: Arc<dyn ProviderClient>,
    ) -> Self {
        Self {
            gemini,
            openai,
            deepseek,
        }
    }

    pub fn client_for(&self, provider: AiProvider) -> &Arc<dyn ProviderClient> {
        match provider {
            AiProvider::Gemini => &self.gemini,
            AiProvider::OpenAi => &self.openai,
            AiProvider::DeepSeek => &self.deepseek,
        }
    }
}
