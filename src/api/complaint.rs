//! REST API endpoint for complaint letter generation

use actix_web::{post, web, HttpResponse};

use crate::api::error::ApiError;
use crate::model::{ComplaintRecord, Config};
use crate::service::letter::LetterError;
use crate::service::LetterService;

const THIRD_PARTY_REQUIREMENTS: &str =
    "Third-party complaints require victim name, address, and relationship details";

/// Generate a formal domestic violence complaint letter
#[utoipa::path(
    post,
    path = "/api/generate-complaint",
    request_body = ComplaintRecord,
    responses(
        (status = 200, description = "Complaint letter generated", body = crate::model::ComplaintResponse),
        (status = 400, description = "Missing required third-party fields"),
        (status = 500, description = "Internal server error")
    ),
    tag = "complaint"
)]
#[post("/api/generate-complaint")]
pub async fn generate_complaint(
    service: web::Data<LetterService>,
    config: web::Data<Config>,
    record: web::Json<ComplaintRecord>,
) -> Result<HttpResponse, ApiError> {
    match service.generate(&record) {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(err @ LetterError::MissingRequiredField(_)) => {
            tracing::warn!(error = %err, "Complaint validation failed");
            Err(ApiError::validation(&config, THIRD_PARTY_REQUIREMENTS))
        }
    }
}

/// Configure complaint routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(generate_complaint);
}
