use super::{AiProvider, ChatId, ConversationId};
use chrono::{DateTime, Utc};

/// One immutable question/answer record belonging to a chat.
///
/// Conversations form an append-only log; nothing mutates a row after
/// creation. `model_used` is the provider that was configured on the chat
/// when the request was made, which is not necessarily the provider that
/// produced the answer when a fallback occurred.
#[derive(Debug, Clone)]
pub struct Conversation {
    pub id: ConversationId,
    pub chat_id: ChatId,
    pub question: String,
    pub answer: String,
    pub model_used: AiProvider,
    pub created_at: DateTime<Utc>,
}

impl Conversation {
    pub fn new(chat_id: ChatId, question: String, answer: String, model_used: AiProvider) -> Self {
        Self {
            id: ConversationId::new(),
            chat_id,
            question,
            answer,
            model_used,
            created_at: Utc::now(),
        }
    }
}
