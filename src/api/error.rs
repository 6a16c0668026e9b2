//! Unified API error handling
//!
//! Consistent error response format across endpoints. Failure responses for
//! the complaint and chat routes always carry an actionable emergency
//! contact, and internal error detail is exposed only when the debug flag is
//! set.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use uuid::Uuid;

use crate::model::Config;
use crate::service::chat::ChatError;

/// Standard error response format
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error type/code
    pub error: String,
    /// Human-readable, safety-preserving message
    pub message: String,
    /// Emergency contact to surface on every failure path
    pub emergency_contact: String,
    /// Unique request ID for tracing
    pub request_id: String,
    /// Internal error detail, present only in debug mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Unified API error type
///
/// All fallible endpoints return `Result<HttpResponse, ApiError>`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Bad request / validation error (400)
    #[error("{message}")]
    Validation {
        message: String,
        emergency_contact: String,
    },

    /// Model collaborator or internal failure (500)
    #[error("{notice}")]
    ServiceFailure {
        notice: String,
        emergency_contact: String,
        detail: String,
        expose_detail: bool,
    },
}

impl ApiError {
    /// Validation failure carrying the user-correctable message
    pub fn validation(config: &Config, message: impl Into<String>) -> Self {
        ApiError::Validation {
            message: message.into(),
            emergency_contact: config.emergency_hotline.clone(),
        }
    }

    /// Chat exchange failure; the notice itself names the hotline
    pub fn chat_failure(config: &Config, source: &ChatError) -> Self {
        ApiError::ServiceFailure {
            notice: format!(
                "We're having trouble processing your message. If you need immediate help, \
                 please call {}",
                config.emergency_hotline
            ),
            emergency_contact: config.emergency_hotline.clone(),
            detail: source.to_string(),
            expose_detail: config.debug,
        }
    }

}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::ServiceFailure { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let error_type = match self {
            ApiError::Validation { .. } => "validation_error",
            ApiError::ServiceFailure { .. } => "service_failure",
        };

        let (emergency_contact, detail) = match self {
            ApiError::Validation {
                emergency_contact, ..
            } => (emergency_contact.clone(), None),
            ApiError::ServiceFailure {
                emergency_contact,
                detail,
                expose_detail,
                ..
            } => {
                tracing::error!(
                    error_type = error_type,
                    status = status.as_u16(),
                    detail = %detail,
                    "API error"
                );
                (
                    emergency_contact.clone(),
                    expose_detail.then(|| detail.clone()),
                )
            }
        };

        HttpResponse::build(status).json(ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
            emergency_contact,
            request_id: Uuid::new_v4().to_string(),
            detail,
        })
    }
}
