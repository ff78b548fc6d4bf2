mod chat_service;
mod generation_service;
mod provider_registry;

pub use chat_service::{ChatService, ChatServiceError};
pub use generation_service::{GenerationError, GenerationResult, GenerationService};
pub use provider_registry::ProviderRegistry;
