//! REST API endpoints for the support chat

use actix_web::{get, post, web, HttpResponse, Responder};
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::model::{ChatHistoryResponse, ChatRequest, ChatResponse, Config};
use crate::service::SupportChatService;

/// Answer a support message within a session
///
/// A missing session id starts a fresh session under a generated id, which is
/// echoed back so the client can continue the conversation.
#[utoipa::path(
    post,
    path = "/api/support-chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Support reply generated", body = ChatResponse),
        (status = 500, description = "Model collaborator unavailable")
    ),
    tag = "chat"
)]
#[post("/api/support-chat")]
pub async fn support_chat(
    service: web::Data<SupportChatService>,
    config: web::Data<Config>,
    request: web::Json<ChatRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = request.into_inner();
    let session_id = request
        .session_id
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    match service.respond(&session_id, &request.message).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ChatResponse {
            response,
            session_id,
        })),
        Err(err) => Err(ApiError::chat_failure(&config, &err)),
    }
}

/// Recorded turns for a session, oldest first
#[utoipa::path(
    get,
    path = "/api/chat-history/{session_id}",
    params(
        ("session_id" = String, Path, description = "Opaque session identifier")
    ),
    responses(
        (status = 200, description = "Session history (empty for unknown sessions)", body = ChatHistoryResponse)
    ),
    tag = "chat"
)]
#[get("/api/chat-history/{session_id}")]
pub async fn chat_history(
    service: web::Data<SupportChatService>,
    path: web::Path<String>,
) -> impl Responder {
    let session_id = path.into_inner();
    let messages = service.history(&session_id).await;

    HttpResponse::Ok().json(ChatHistoryResponse { messages })
}

/// Configure chat routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(support_chat).service(chat_history);
}
