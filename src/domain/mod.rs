mod ai_provider;
mod chat;
mod chat_id;
mod conversation;
mod conversation_id;
mod user_id;

pub use ai_provider::AiProvider;
pub use chat::{Chat, NEW_CHAT_TITLE};
pub use chat_id::ChatId;
pub use conversation::Conversation;
pub use conversation_id::ConversationId;
pub use user_id::UserId;
