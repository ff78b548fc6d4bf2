use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::services::ChatServiceError;
use crate::domain::{AiProvider, ChatId};
use crate::presentation::extract::AuthenticatedUser;
use crate::presentation::state::AppState;

use super::dto::{ChatResponse, ErrorResponse};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateChatRequest {
    pub ai_provider: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProviderRequest {
    pub ai_provider: Option<String>,
}

#[derive(Serialize)]
pub struct DeleteChatResponse {
    pub message: &'static str,
}

#[tracing::instrument(skip(state, request), fields(user_id = %user.as_uuid()))]
pub async fn create_chat_handler(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(request): Json<CreateChatRequest>,
) -> impl IntoResponse {
    let provider = match parse_optional_provider(request.ai_provider) {
        Ok(provider) => provider,
        Err(response) => return response.into_response(),
    };

    match state.chat_service.create_chat(user, provider).await {
        Ok(chat) => (StatusCode::OK, Json(ChatResponse::from(&chat))).into_response(),
        Err(e) => chat_error_response(e).into_response(),
    }
}

#[tracing::instrument(skip(state), fields(user_id = %user.as_uuid()))]
pub async fn list_chats_handler(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> impl IntoResponse {
    match state.chat_service.list_chats(user).await {
        Ok(chats) => {
            let chats: Vec<ChatResponse> = chats.iter().map(ChatResponse::from).collect();
            (StatusCode::OK, Json(chats)).into_response()
        }
        Err(e) => chat_error_response(e).into_response(),
    }
}

#[tracing::instrument(skip(state), fields(chat_id = %chat_id, user_id = %user.as_uuid()))]
pub async fn delete_chat_handler(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(chat_id): Path<Uuid>,
) -> impl IntoResponse {
    match state
        .chat_service
        .delete_chat(ChatId::from_uuid(chat_id), user)
        .await
    {
        Ok(()) => (
            StatusCode::OK,
            Json(DeleteChatResponse {
                message: "Chat Deleted",
            }),
        )
            .into_response(),
        Err(e) => chat_error_response(e).into_response(),
    }
}

#[tracing::instrument(skip(state, request), fields(chat_id = %chat_id, user_id = %user.as_uuid()))]
pub async fn update_provider_handler(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(chat_id): Path<Uuid>,
    Json(request): Json<UpdateProviderRequest>,
) -> impl IntoResponse {
    let provider = match parse_optional_provider(request.ai_provider) {
        Ok(Some(provider)) => provider,
        Ok(None) => return invalid_provider_response().into_response(),
        Err(response) => return response.into_response(),
    };

    match state
        .chat_service
        .set_provider(ChatId::from_uuid(chat_id), user, provider)
        .await
    {
        Ok(chat) => (StatusCode::OK, Json(ChatResponse::from(&chat))).into_response(),
        Err(e) => chat_error_response(e).into_response(),
    }
}

/// Provider values arrive as free text and are validated against the closed
/// enumeration here, never silently defaulted.
fn parse_optional_provider(
    raw: Option<String>,
) -> Result<Option<AiProvider>, (StatusCode, Json<ErrorResponse>)> {
    match raw {
        None => Ok(None),
        Some(value) => value
            .parse::<AiProvider>()
            .map(Some)
            .map_err(|_| invalid_provider_response()),
    }
}

fn invalid_provider_response() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            message: "Invalid AI provider specified".to_string(),
        }),
    )
}

pub(super) fn chat_error_response(error: ChatServiceError) -> (StatusCode, Json<ErrorResponse>) {
    let (status, message) = match &error {
        ChatServiceError::ChatNotFound => (StatusCode::NOT_FOUND, "No chat with this id".to_string()),
        ChatServiceError::Unauthorized => (StatusCode::FORBIDDEN, "Unauthorized".to_string()),
        ChatServiceError::Repository(e) => {
            tracing::error!(error = %e, "Chat operation failed");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    };

    (status, Json(ErrorResponse { message }))
}
