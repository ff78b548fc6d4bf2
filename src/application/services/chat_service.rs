use std::sync::Arc;

use tracing::instrument;

use crate::application::ports::{
    ChatRepository, ChatUpdate, ConversationRepository, RepositoryError,
};
use crate::domain::{AiProvider, Chat, ChatId, Conversation, UserId};

/// Chat lifecycle operations: creation, listing, deletion, and explicit
/// provider selection. Deletion cascades to the chat's conversations.
pub struct ChatService {
    chats: Arc<dyn ChatRepository>,
    conversations: Arc<dyn ConversationRepository>,
}

#[derive(Debug, thiserror::Error)]
pub enum ChatServiceError {
    #[error("no chat with this id")]
    ChatNotFound,
    #[error("unauthorized")]
    Unauthorized,
    #[error("repository: {0}")]
    Repository(#[from] RepositoryError),
}

impl ChatService {
    pub fn new(
        chats: Arc<dyn ChatRepository>,
        conversations: Arc<dyn ConversationRepository>,
    ) -> Self {
        Self {
            chats,
            conversations,
        }
    }

    #[instrument(skip(self), fields(user_id = %user_id.as_uuid()))]
    pub async fn create_chat(
        &self,
        user_id: UserId,
        provider: Option<AiProvider>,
    ) -> Result<Chat, ChatServiceError> {
        let chat = Chat::new(user_id, provider.unwrap_or(AiProvider::Gemini));
        self.chats.create(&chat).await?;
        Ok(chat)
    }

    #[instrument(skip(self), fields(user_id = %user_id.as_uuid()))]
    pub async fn list_chats(&self, user_id: UserId) -> Result<Vec<Chat>, ChatServiceError> {
        Ok(self.chats.list_for_user(user_id).await?)
    }

    #[instrument(skip(self), fields(chat_id = %chat_id.as_uuid()))]
    pub async fn conversations(
        &self,
        chat_id: ChatId,
    ) -> Result<Vec<Conversation>, ChatServiceError> {
        self.chats
            .find_by_id(chat_id)
            .await?
            .ok_or(ChatServiceError::ChatNotFound)?;

        Ok(self.conversations.list_for_chat(chat_id).await?)
    }

    #[instrument(skip(self), fields(chat_id = %chat_id.as_uuid(), user_id = %user_id.as_uuid()))]
    pub async fn delete_chat(
        &self,
        chat_id: ChatId,
        user_id: UserId,
    ) -> Result<(), ChatServiceError> {
        let chat = self
            .chats
            .find_by_id(chat_id)
            .await?
            .ok_or(ChatServiceError::ChatNotFound)?;

        if chat.user_id != user_id {
            return Err(ChatServiceError::Unauthorized);
        }

        self.conversations.delete_for_chat(chat_id).await?;
        self.chats.delete(chat_id).await?;
        Ok(())
    }

    #[instrument(skip(self), fields(chat_id = %chat_id.as_uuid(), user_id = %user_id.as_uuid(), provider = %provider))]
    pub async fn set_provider(
        &self,
        chat_id: ChatId,
        user_id: UserId,
        provider: AiProvider,
    ) -> Result<Chat, ChatServiceError> {
        let chat = self
            .chats
            .find_by_id(chat_id)
            .await?
            .ok_or(ChatServiceError::ChatNotFound)?;

        if chat.user_id != user_id {
            return Err(ChatServiceError::Unauthorized);
        }

        let update = ChatUpdate {
            latest_message: None,
            ai_provider: Some(provider),
        };
        self.chats
            .update(chat_id, update)
            .await?
            .ok_or(ChatServiceError::ChatNotFound)
    }
}
