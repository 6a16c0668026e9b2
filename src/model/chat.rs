//! Support chat models

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One message in a conversation, tagged by origin
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatTurn {
    pub text: String,
    pub is_user: bool,
}

impl ChatTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_user: true,
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_user: false,
        }
    }
}

/// Inbound chat message
#[derive(Debug, Deserialize, ToSchema)]
pub struct ChatRequest {
    pub message: String,
    /// Opaque client-supplied conversation id; generated when absent
    #[serde(default)]
    pub session_id: Option<String>,
}

/// Chat reply, echoing the session id the exchange was recorded under
#[derive(Debug, Serialize, ToSchema)]
pub struct ChatResponse {
    pub response: String,
    pub session_id: String,
}

/// Full recorded history for one session
#[derive(Debug, Serialize, ToSchema)]
pub struct ChatHistoryResponse {
    pub messages: Vec<ChatTurn>,
}
