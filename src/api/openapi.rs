//! OpenAPI specification endpoints

use actix_web::{get, HttpResponse, Responder};
use utoipa::OpenApi;

/// API documentation for the support service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "DV Support Service",
        description = "Domestic violence support chat and complaint letter generation"
    ),
    paths(
        crate::api::complaint::generate_complaint,
        crate::api::chat::support_chat,
        crate::api::chat::chat_history,
        crate::api::health::liveness,
    ),
    components(schemas(
        crate::model::ComplaintRecord,
        crate::model::FilingType,
        crate::model::ComplaintResponse,
        crate::model::ImmediateHelp,
        crate::model::ChatRequest,
        crate::model::ChatResponse,
        crate::model::ChatTurn,
        crate::model::ChatHistoryResponse,
        crate::api::health::HealthStatus,
    )),
    tags(
        (name = "complaint", description = "Complaint letter generation"),
        (name = "chat", description = "Session-scoped support chat"),
        (name = "health", description = "Service health probes")
    )
)]
pub struct ApiDoc;

/// Serve OpenAPI JSON specification
#[get("/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

/// Serve OpenAPI YAML specification
#[get("/openapi.yaml")]
pub async fn openapi_yaml() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/yaml")
        .body(ApiDoc::openapi().to_yaml().unwrap())
}

/// Configure OpenAPI routes
pub fn configure(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(openapi_json).service(openapi_yaml);
}
