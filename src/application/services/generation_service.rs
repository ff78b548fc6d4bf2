use std::sync::Arc;

use tracing::{instrument, warn};

use crate::application::ports::{
    ChatRepository, ChatUpdate, ConversationRepository, ProviderError, RepositoryError,
};
use crate::domain::{AiProvider, Chat, ChatId, Conversation};

use super::ProviderRegistry;

/// Answer-generation pipeline: resolves the chat's configured provider,
/// attempts generation, applies the Gemini fallback policy on failure, and
/// records the outcome.
///
/// Fallback policy: Gemini is the universal fallback target. A chat already
/// configured for Gemini gets a single attempt; any other provider gets one
/// attempt followed, on any error kind, by one Gemini attempt. The two
/// attempts are strictly sequential. A failed fallback (or a failed sole
/// Gemini attempt) is terminal and persists nothing.
pub struct GenerationService {
    providers: ProviderRegistry,
    chats: Arc<dyn ChatRepository>,
    conversations: Arc<dyn ConversationRepository>,
}

/// Outcome of a completed generation request, returned to the caller so the
/// client can reconcile its provider selector with what actually happened.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub conversation: Conversation,
    pub updated_chat: Chat,
    pub fallback_used: bool,
    pub fallback_message: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("no chat with this id")]
    ChatNotFound,
    #[error("{0}")]
    Validation(String),
    #[error("failed to generate AI response: {0}")]
    Generation(ProviderError),
    #[error("repository: {0}")]
    Repository(#[from] RepositoryError),
}

impl GenerationService {
    pub fn new(
        providers: ProviderRegistry,
        chats: Arc<dyn ChatRepository>,
        conversations: Arc<dyn ConversationRepository>,
    ) -> Self {
        Self {
            providers,
            chats,
            conversations,
        }
    }

    #[instrument(skip(self, question), fields(chat_id = %chat_id.as_uuid()))]
    pub async fn generate(
        &self,
        chat_id: ChatId,
        question: &str,
    ) -> Result<GenerationResult, GenerationError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(GenerationError::Validation(
                "Question is required".to_string(),
            ));
        }

        let chat = self
            .chats
            .find_by_id(chat_id)
            .await?
            .ok_or(GenerationError::ChatNotFound)?;

        let configured = chat.ai_provider;
        let (answer, fallback_used) = self.attempt(configured, question).await?;

        // `model_used` deliberately records the provider that was configured
        // at request time, even when the fallback answered. Subsequent
        // requests still need the chat itself pointed at the provider that
        // worked.
        let conversation = Conversation::new(
            chat.id,
            question.to_string(),
            answer,
            configured,
        );
        self.conversations.create(&conversation).await?;

        let update = ChatUpdate {
            latest_message: Some(question.to_string()),
            ai_provider: fallback_used.then_some(AiProvider::Gemini),
        };
        let updated_chat = self
            .chats
            .update(chat.id, update)
            .await?
            .ok_or(GenerationError::ChatNotFound)?;

        let fallback_message = fallback_used.then(|| {
            format!(
                "{} API error. Automatically switched to Gemini AI.",
                configured.display_name()
            )
        });

        Ok(GenerationResult {
            conversation,
            updated_chat,
            fallback_used,
            fallback_message,
        })
    }

    /// Primary attempt plus, for non-Gemini providers, the Gemini fallback.
    /// Returns the final answer and whether the fallback produced it.
    async fn attempt(
        &self,
        configured: AiProvider,
        question: &str,
    ) -> Result<(String, bool), GenerationError> {
        let primary = self.providers.client_for(configured);

        match primary.generate(question).await {
            Ok(answer) => Ok((answer, false)),
            Err(primary_error) if configured != AiProvider::Gemini => {
                warn!(
                    provider = %configured,
                    kind = %primary_error.kind,
                    error = %primary_error,
                    "primary provider failed, falling back to Gemini"
                );

                let fallback = self.providers.client_for(AiProvider::Gemini);
                let answer = fallback
                    .generate(question)
                    .await
                    .map_err(GenerationError::Generation)?;

                Ok((
                    format!(
                        "⚠️ {} API error occurred. Falling back to Gemini AI.\n\n{}",
                        configured.display_name(),
                        answer
                    ),
                    true,
                ))
            }
            Err(error) => Err(GenerationError::Generation(error)),
        }
    }
}
