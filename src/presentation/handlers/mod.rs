mod chat;
mod conversation;
mod dto;
mod health;
mod text;

pub use chat::{
    create_chat_handler, delete_chat_handler, list_chats_handler, update_provider_handler,
};
pub use conversation::{add_conversation_handler, get_conversation_handler};
pub use dto::{ChatResponse, ConversationResponse, ErrorResponse};
pub use health::health_handler;
pub use text::{diagnose_text_handler, format_text_handler};
