use serde::Serialize;

use crate::domain::{AiProvider, Chat, Conversation};

#[derive(Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub id: String,
    pub user: String,
    pub latest_message: String,
    pub ai_provider: AiProvider,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Chat> for ChatResponse {
    fn from(chat: &Chat) -> Self {
        Self {
            id: chat.id.as_uuid().to_string(),
            user: chat.user_id.as_uuid().to_string(),
            latest_message: chat.latest_message.clone(),
            ai_provider: chat.ai_provider,
            created_at: chat.created_at.to_rfc3339(),
            updated_at: chat.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationResponse {
    pub id: String,
    pub chat: String,
    pub question: String,
    pub answer: String,
    pub model_used: AiProvider,
    pub created_at: String,
}

impl From<&Conversation> for ConversationResponse {
    fn from(conversation: &Conversation) -> Self {
        Self {
            id: conversation.id.as_uuid().to_string(),
            chat: conversation.chat_id.as_uuid().to_string(),
            question: conversation.question.clone(),
            answer: conversation.answer.clone(),
            model_used: conversation.model_used,
            created_at: conversation.created_at.to_rfc3339(),
        }
    }
}
