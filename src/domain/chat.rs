use super::{AiProvider, ChatId, UserId};
use chrono::{DateTime, Utc};

pub const NEW_CHAT_TITLE: &str = "New Chat";

/// A persistent conversation thread owned by one user.
///
/// `ai_provider` is the provider that will serve the *next* request; it is
/// updated when the user picks a provider or when a fallback substitutes
/// Gemini for a failing one.
#[derive(Debug, Clone)]
pub struct Chat {
    pub id: ChatId,
    pub user_id: UserId,
    pub latest_message: String,
    pub ai_provider: AiProvider,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Chat {
    pub fn new(user_id: UserId, ai_provider: AiProvider) -> Self {
        let now = Utc::now();
        Self {
            id: ChatId::new(),
            user_id,
            latest_message: NEW_CHAT_TITLE.to_string(),
            ai_provider,
            created_at: now,
            updated_at: now,
        }
    }
}
