use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::application::ports::{
    ChatRepository, ChatUpdate, ConversationRepository, RepositoryError,
};
use crate::domain::{Chat, ChatId, Conversation, ConversationId, UserId};

/// In-memory chat store for tests and scaffold mode.
#[derive(Default)]
pub struct InMemoryChatRepository {
    chats: Mutex<HashMap<ChatId, Chat>>,
}

impl InMemoryChatRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ChatRepository for InMemoryChatRepository {
    async fn create(&self, chat: &Chat) -> Result<(), RepositoryError> {
        let mut chats = self.chats.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        chats.insert(chat.id, chat.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: ChatId) -> Result<Option<Chat>, RepositoryError> {
        let chats = self.chats.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        Ok(chats.get(&id).cloned())
    }

    async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Chat>, RepositoryError> {
        let chats = self.chats.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        let mut owned: Vec<Chat> = chats
            .values()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(owned)
    }

    async fn update(
        &self,
        id: ChatId,
        update: ChatUpdate,
    ) -> Result<Option<Chat>, RepositoryError> {
        let mut chats = self.chats.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        Ok(chats.get_mut(&id).map(|chat| {
            if let Some(latest_message) = update.latest_message {
                chat.latest_message = latest_message;
            }
            if let Some(ai_provider) = update.ai_provider {
                chat.ai_provider = ai_provider;
            }
            chat.updated_at = Utc::now();
            chat.clone()
        }))
    }

    async fn delete(&self, id: ChatId) -> Result<(), RepositoryError> {
        let mut chats = self.chats.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        chats.remove(&id);
        Ok(())
    }
}

/// In-memory append-only conversation store for tests and scaffold mode.
#[derive(Default)]
pub struct InMemoryConversationRepository {
    conversations: Mutex<HashMap<ConversationId, Conversation>>,
}

impl InMemoryConversationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of stored conversations, across all chats.
    pub fn stored_count(&self) -> usize {
        self.conversations
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .len()
    }
}

#[async_trait]
impl ConversationRepository for InMemoryConversationRepository {
    async fn create(&self, conversation: &Conversation) -> Result<(), RepositoryError> {
        let mut conversations = self
            .conversations
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        conversations.insert(conversation.id, conversation.clone());
        Ok(())
    }

    async fn list_for_chat(&self, chat_id: ChatId) -> Result<Vec<Conversation>, RepositoryError> {
        let conversations = self
            .conversations
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let mut history: Vec<Conversation> = conversations
            .values()
            .filter(|c| c.chat_id == chat_id)
            .cloned()
            .collect();
        history.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(history)
    }

    async fn delete_for_chat(&self, chat_id: ChatId) -> Result<(), RepositoryError> {
        let mut conversations = self
            .conversations
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        conversations.retain(|_, c| c.chat_id != chat_id);
        Ok(())
    }
}
