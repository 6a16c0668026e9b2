//! Application state and service initialization
//!
//! Centralizes service construction and dependency injection so `main` stays
//! a thin transport shell and handler tests can wire services directly.

use std::sync::Arc;

use crate::model::Config;
use crate::service::{GeminiClient, LetterService, SupportChatService};

const ENV_API_KEY: &str = "API_KEY";

/// Application state containing all services and shared resources
pub struct AppState {
    pub config: Config,
    /// Complaint letter template engine
    pub letter_service: LetterService,
    /// Session-scoped support chat
    pub chat_service: Arc<SupportChatService>,
}

impl AppState {
    /// Initialize all services and build application state
    ///
    /// Requires `API_KEY` for the model collaborator; everything else falls
    /// back to defaults.
    pub fn new(config: Config) -> Result<Self, AppError> {
        let api_key = std::env::var(ENV_API_KEY).map_err(|_| AppError::MissingConfig(ENV_API_KEY))?;

        let model = Arc::new(GeminiClient::new(&api_key));
        let chat_service = Arc::new(SupportChatService::new(model));
        let letter_service = LetterService::new(&config);

        Ok(Self {
            config,
            letter_service,
            chat_service,
        })
    }
}

/// Application-level errors
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum AppError {
    /// Missing required configuration
    #[error("Missing required configuration: {0}")]
    MissingConfig(&'static str),
}
