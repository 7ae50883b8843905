use std::sync::Arc;

use axum::{
    extract::{Extension, Json, Path},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use chat_core::{ChatEngine, ChatStore};
use llm_provider::ResilientProvider;
use serde::Deserialize;
use serde_json::json;
use tower_http::cors::CorsLayer;
use tracing::error;
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ChatStore>,
    pub engine: Arc<ChatEngine<ResilientProvider>>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/chats", get(list_chats).post(create_chat))
        .route(
            "/api/chats/:chat_id/messages",
            get(chat_messages).post(send_message),
        )
        .layer(CorsLayer::permissive())
        .layer(Extension(state))
}

/// Auth is out of scope; the header stands in for whatever populates the
/// user identity in a real deployment.
fn user_id(headers: &HeaderMap) -> String {
    headers
        .get("x-user-id")
        .and_then(|v| v.to_str().ok())
        .filter(|s| !s.is_empty())
        .unwrap_or("local")
        .to_string()
}

async fn health() -> impl IntoResponse {
    Json(json!({ "ok": true }))
}

async fn list_chats(Extension(state): Extension<AppState>, headers: HeaderMap) -> Response {
    match state.store.list_chats(&user_id(&headers)).await {
        Ok(chats) => Json(chats).into_response(),
        Err(err) => {
            error!("failed to list chats: {:#}", err);
            internal_error()
        }
    }
}

#[derive(Deserialize)]
struct CreateChatBody {
    name: Option<String>,
}

async fn create_chat(
    Extension(state): Extension<AppState>,
    headers: HeaderMap,
    body: Option<Json<CreateChatBody>>,
) -> Response {
    let name = body.and_then(|Json(b)| b.name);
    match state.store.create_chat(&user_id(&headers), name).await {
        Ok(chat) => (StatusCode::CREATED, Json(chat)).into_response(),
        Err(err) => {
            error!("failed to create chat: {:#}", err);
            internal_error()
        }
    }
}

async fn chat_messages(
    Path(chat_id): Path<Uuid>,
    Extension(state): Extension<AppState>,
    headers: HeaderMap,
) -> Response {
    match state.store.messages(&user_id(&headers), chat_id).await {
        Ok(Some(messages)) => Json(messages).into_response(),
        Ok(None) => chat_not_found(),
        Err(err) => {
            error!("failed to load messages: {:#}", err);
            internal_error()
        }
    }
}

#[derive(Deserialize)]
struct SendMessageBody {
    content: Option<String>,
}

async fn send_message(
    Path(chat_id): Path<Uuid>,
    Extension(state): Extension<AppState>,
    headers: HeaderMap,
    body: Option<Json<SendMessageBody>>,
) -> Response {
    let content = body
        .and_then(|Json(b)| b.content)
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty());
    let Some(content) = content else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "message content is required" })),
        )
            .into_response();
    };

    match state
        .engine
        .send_message(&user_id(&headers), chat_id, &content)
        .await
    {
        Ok(Some(exchange)) => Json(exchange).into_response(),
        Ok(None) => chat_not_found(),
        Err(err) => {
            // Outside both safety nets (provider fallback, default plan);
            // surface as a generic server error.
            error!("chat turn failed: {:#}", err);
            internal_error()
        }
    }
}

fn chat_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "chat not found" })),
    )
        .into_response()
}

fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "internal server error" })),
    )
        .into_response()
}
