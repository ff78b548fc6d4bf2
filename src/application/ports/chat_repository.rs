use crate::domain::{AiProvider, Chat, ChatId, UserId};
use async_trait::async_trait;

use super::RepositoryError;

/// Partial update applied to a chat's rolling state.
///
/// `None` fields are left untouched. There is deliberately no way to touch
/// `created_at` or the owning user.
#[derive(Debug, Clone, Default)]
pub struct ChatUpdate {
    pub latest_message: Option<String>,
    pub ai_provider: Option<AiProvider>,
}

#[async_trait]
pub trait ChatRepository: Send + Sync {
    async fn create(&self, chat: &Chat) -> Result<(), RepositoryError>;

    async fn find_by_id(&self, id: ChatId) -> Result<Option<Chat>, RepositoryError>;

    /// All chats owned by the user, newest first.
    async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Chat>, RepositoryError>;

    /// Applies the update and returns the fresh snapshot, or `None` when the
    /// chat no longer exists.
    async fn update(&self, id: ChatId, update: ChatUpdate)
        -> Result<Option<Chat>, RepositoryError>;

    async fn delete(&self, id: ChatId) -> Result<(), RepositoryError>;
}
