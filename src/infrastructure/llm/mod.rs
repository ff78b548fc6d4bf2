mod gemini_client;
mod mock_provider_client;
mod openrouter_client;

pub use gemini_client::{DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, GeminiClient};
pub use mock_provider_client::MockProviderClient;
pub use openrouter_client::{
    DEFAULT_DEEPSEEK_MODEL, DEFAULT_OPENAI_MODEL, DEFAULT_OPENROUTER_BASE_URL, OpenRouterClient,
};
