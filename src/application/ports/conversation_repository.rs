use crate::domain::{ChatId, Conversation};
use async_trait::async_trait;

use super::RepositoryError;

/// Append-only store of question/answer records.
///
/// There is no update operation: conversations are immutable once created.
#[async_trait]
pub trait ConversationRepository: Send + Sync {
    async fn create(&self, conversation: &Conversation) -> Result<(), RepositoryError>;

    /// History for one chat, oldest first.
    async fn list_for_chat(&self, chat_id: ChatId) -> Result<Vec<Conversation>, RepositoryError>;

    /// Removes every conversation belonging to the chat. Used by the
    /// cascade on chat deletion.
    async fn delete_for_chat(&self, chat_id: ChatId) -> Result<(), RepositoryError>;
}
