mod memory_repository;
mod pg_chat_repository;
mod pg_conversation_repository;
mod pg_pool;

pub use memory_repository::{InMemoryChatRepository, InMemoryConversationRepository};
pub use pg_chat_repository::PgChatRepository;
pub use pg_conversation_repository::PgConversationRepository;
pub use pg_pool::{create_pool, run_migrations};
