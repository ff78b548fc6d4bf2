use async_trait::async_trait;
use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use tracing::instrument;

use crate::application::ports::{ChatRepository, ChatUpdate, RepositoryError};
use crate::domain::{Chat, ChatId, UserId};

pub struct PgChatRepository {
    pool: PgPool,
}

impl PgChatRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_chat(row: &PgRow) -> Result<Chat, RepositoryError> {
        let provider: String = row
            .try_get("ai_provider")
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;
        let ai_provider = provider
            .parse()
            .map_err(RepositoryError::QueryFailed)?;

        Ok(Chat {
            id: ChatId::from_uuid(
                row.try_get("id")
                    .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?,
            ),
            user_id: UserId::from_uuid(
                row.try_get("user_id")
                    .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?,
            ),
            latest_message: row
                .try_get("latest_message")
                .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?,
            ai_provider,
            created_at: row
                .try_get("created_at")
                .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?,
            updated_at: row
                .try_get("updated_at")
                .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?,
        })
    }
}

#[async_trait]
impl ChatRepository for PgChatRepository {
    #[instrument(skip(self, chat), fields(chat_id = %chat.id.as_uuid()))]
    async fn create(&self, chat: &Chat) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO chats (id, user_id, latest_message, ai_provider, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(chat.id.as_uuid())
        .bind(chat.user_id.as_uuid())
        .bind(&chat.latest_message)
        .bind(chat.ai_provider.as_str())
        .bind(chat.created_at)
        .bind(chat.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(())
    }

    #[instrument(skip(self), fields(chat_id = %id.as_uuid()))]
    async fn find_by_id(&self, id: ChatId) -> Result<Option<Chat>, RepositoryError> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, latest_message, ai_provider, created_at, updated_at
            FROM chats
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        row.map(|r| Self::row_to_chat(&r)).transpose()
    }

    #[instrument(skip(self), fields(user_id = %user_id.as_uuid()))]
    async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Chat>, RepositoryError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, latest_message, ai_provider, created_at, updated_at
            FROM chats
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        rows.iter().map(Self::row_to_chat).collect()
    }

    #[instrument(skip(self, update), fields(chat_id = %id.as_uuid()))]
    async fn update(
        &self,
        id: ChatId,
        update: ChatUpdate,
    ) -> Result<Option<Chat>, RepositoryError> {
        let row = sqlx::query(
            r#"
            UPDATE chats
            SET latest_message = COALESCE($2, latest_message),
                ai_provider = COALESCE($3, ai_provider),
                updated_at = $4
            WHERE id = $1
            RETURNING id, user_id, latest_message, ai_provider, created_at, updated_at
            "#,
        )
        .bind(id.as_uuid())
        .bind(update.latest_message)
        .bind(update.ai_provider.map(|p| p.as_str()))
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        row.map(|r| Self::row_to_chat(&r)).transpose()
    }

    #[instrument(skip(self), fields(chat_id = %id.as_uuid()))]
    async fn delete(&self, id: ChatId) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM chats WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(())
    }
}
