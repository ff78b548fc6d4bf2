mod chat_repository;
mod conversation_repository;
mod provider_client;
mod repository_error;

pub use chat_repository::{ChatRepository, ChatUpdate};
pub use conversation_repository::ConversationRepository;
pub use provider_client::{ProviderClient, ProviderError, ProviderErrorKind};
pub use repository_error::RepositoryError;
