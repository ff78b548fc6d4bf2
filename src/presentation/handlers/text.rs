use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::infrastructure::text_processing::{TextDiagnostics, diagnose_text, format_answer};

#[derive(Deserialize)]
pub struct TextRequest {
    pub text: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatTextResponse {
    pub success: bool,
    pub original_length: usize,
    pub formatted_length: usize,
    pub formatted_text: String,
}

#[derive(Serialize)]
pub struct DiagnoseTextResponse {
    pub success: bool,
    pub analysis: TextDiagnostics,
}

#[derive(Serialize)]
pub struct TextErrorResponse {
    pub success: bool,
    pub error: &'static str,
}

/// Display-layer cleanup of an answer. Best-effort: this endpoint never
/// rewrites what the recorder persisted.
pub async fn format_text_handler(Json(request): Json<TextRequest>) -> impl IntoResponse {
    let Some(text) = non_empty(request.text) else {
        return no_text_response().into_response();
    };

    let formatted = format_answer(&text);

    (
        StatusCode::OK,
        Json(FormatTextResponse {
            success: true,
            original_length: text.chars().count(),
            formatted_length: formatted.chars().count(),
            formatted_text: formatted,
        }),
    )
        .into_response()
}

pub async fn diagnose_text_handler(Json(request): Json<TextRequest>) -> impl IntoResponse {
    let Some(text) = non_empty(request.text) else {
        return no_text_response().into_response();
    };

    (
        StatusCode::OK,
        Json(DiagnoseTextResponse {
            success: true,
            analysis: diagnose_text(&text),
        }),
    )
        .into_response()
}

fn non_empty(text: Option<String>) -> Option<String> {
    text.filter(|t| !t.is_empty())
}

fn no_text_response() -> (StatusCode, Json<TextErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(TextErrorResponse {
            success: false,
            error: "No text provided",
        }),
    )
}
