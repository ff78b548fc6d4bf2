use std::sync::Arc;

use crate::application::services::{ChatService, GenerationService};

#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ChatService>,
    pub generation_service: Arc<GenerationService>,
}
