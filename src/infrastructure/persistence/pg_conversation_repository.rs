use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use tracing::instrument;

use crate::application::ports::{ConversationRepository, RepositoryError};
use crate::domain::{ChatId, Conversation, ConversationId};

pub struct PgConversationRepository {
    pool: PgPool,
}

impl PgConversationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_conversation(row: &PgRow) -> Result<Conversation, RepositoryError> {
        let model: String = row
            .try_get("model_used")
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;
        let model_used = model.parse().map_err(RepositoryError::QueryFailed)?;

        Ok(Conversation {
            id: ConversationId::from_uuid(
                row.try_get("id")
                    .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?,
            ),
            chat_id: ChatId::from_uuid(
                row.try_get("chat_id")
                    .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?,
            ),
            question: row
                .try_get("question")
                .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?,
            answer: row
                .try_get("answer")
                .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?,
            model_used,
            created_at: row
                .try_get("created_at")
                .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?,
        })
    }
}

#[async_trait]
impl ConversationRepository for PgConversationRepository {
    #[instrument(skip(self, conversation), fields(conversation_id = %conversation.id.as_uuid(), chat_id = %conversation.chat_id.as_uuid()))]
    async fn create(&self, conversation: &Conversation) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO conversations (id, chat_id, question, answer, model_used, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(conversation.id.as_uuid())
        .bind(conversation.chat_id.as_uuid())
        .bind(&conversation.question)
        .bind(&conversation.answer)
        .bind(conversation.model_used.as_str())
        .bind(conversation.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(())
    }

    #[instrument(skip(self), fields(chat_id = %chat_id.as_uuid()))]
    async fn list_for_chat(&self, chat_id: ChatId) -> Result<Vec<Conversation>, RepositoryError> {
        let rows = sqlx::query(
            r#"
            SELECT id, chat_id, question, answer, model_used, created_at
            FROM conversations
            WHERE chat_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(chat_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        rows.iter().map(Self::row_to_conversation).collect()
    }

    #[instrument(skip(self), fields(chat_id = %chat_id.as_uuid()))]
    async fn delete_for_chat(&self, chat_id: ChatId) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM conversations WHERE chat_id = $1")
            .bind(chat_id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(())
    }
}
