use axum::Router;
use axum::middleware;
use axum::routing::{get, patch, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    add_conversation_handler, create_chat_handler, delete_chat_handler, diagnose_text_handler,
    format_text_handler, get_conversation_handler, health_handler, list_chats_handler,
    update_provider_handler,
};
use crate::presentation::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/chat/new", post(create_chat_handler))
        .route("/api/chat/all", get(list_chats_handler))
        .route(
            "/api/chat/{id}",
            post(add_conversation_handler)
                .get(get_conversation_handler)
                .delete(delete_chat_handler),
        )
        .route("/api/chat/{id}/provider", patch(update_provider_handler))
        .route("/api/text/format-text", post(format_text_handler))
        .route("/api/text/diagnose-text", post(diagnose_text_handler))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
