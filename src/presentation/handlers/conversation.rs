use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::services::GenerationError;
use crate::domain::ChatId;
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::extract::AuthenticatedUser;
use crate::presentation::state::AppState;

use super::chat::chat_error_response;
use super::dto::{ChatResponse, ConversationResponse, ErrorResponse};

#[derive(Deserialize)]
pub struct AddConversationRequest {
    pub question: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddConversationResponse {
    pub conversation: ConversationResponse,
    pub updated_chat: ChatResponse,
    pub fallback_used: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_message: Option<String>,
}

#[tracing::instrument(skip(state, request), fields(chat_id = %chat_id))]
pub async fn add_conversation_handler(
    State(state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    Path(chat_id): Path<Uuid>,
    Json(request): Json<AddConversationRequest>,
) -> impl IntoResponse {
    let question = request.question.unwrap_or_default();
    tracing::debug!(question = %sanitize_prompt(&question), "Processing generation request");

    match state
        .generation_service
        .generate(ChatId::from_uuid(chat_id), &question)
        .await
    {
        Ok(result) => {
            tracing::info!(
                fallback_used = result.fallback_used,
                model_used = %result.conversation.model_used,
                "Conversation created"
            );
            (
                StatusCode::OK,
                Json(AddConversationResponse {
                    conversation: ConversationResponse::from(&result.conversation),
                    updated_chat: ChatResponse::from(&result.updated_chat),
                    fallback_used: result.fallback_used,
                    fallback_message: result.fallback_message,
                }),
            )
                .into_response()
        }
        Err(e) => generation_error_response(e).into_response(),
    }
}

#[tracing::instrument(skip(state), fields(chat_id = %chat_id))]
pub async fn get_conversation_handler(
    State(state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    Path(chat_id): Path<Uuid>,
) -> impl IntoResponse {
    match state
        .chat_service
        .conversations(ChatId::from_uuid(chat_id))
        .await
    {
        Ok(conversations) => {
            let conversations: Vec<ConversationResponse> =
                conversations.iter().map(ConversationResponse::from).collect();
            (StatusCode::OK, Json(conversations)).into_response()
        }
        Err(e) => chat_error_response(e).into_response(),
    }
}

fn generation_error_response(error: GenerationError) -> (StatusCode, Json<ErrorResponse>) {
    let (status, message) = match &error {
        GenerationError::ChatNotFound => {
            (StatusCode::NOT_FOUND, "No chat with this id".to_string())
        }
        GenerationError::Validation(message) => (StatusCode::BAD_REQUEST, message.clone()),
        GenerationError::Generation(e) => {
            tracing::error!(provider = %e.provider, kind = %e.kind, error = %e, "Generation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to generate AI response: {}", e),
            )
        }
        GenerationError::Repository(e) => {
            tracing::error!(error = %e, "Conversation persistence failed");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    };

    (status, Json(ErrorResponse { message }))
}
