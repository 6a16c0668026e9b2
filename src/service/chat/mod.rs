//! Support chat orchestration
//!
//! One exchange reads the session history, composes the prompt, calls the
//! model collaborator, and records the user/assistant pair. The session lock
//! is held for the whole exchange, so messages racing on one session id are
//! served one at a time and history mutates only after the model succeeds.

use std::sync::Arc;

use crate::model::ChatTurn;
use crate::service::llm::{GenerativeModel, ModelError};
use crate::service::session::SessionStore;

pub mod prompts;

use prompts::build_support_prompt;

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("model generation failed: {0}")]
    Model(#[from] ModelError),
}

/// Service answering support messages with session-scoped context
pub struct SupportChatService {
    model: Arc<dyn GenerativeModel>,
    sessions: SessionStore,
}

impl SupportChatService {
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self {
            model,
            sessions: SessionStore::new(),
        }
    }

    /// Answer one support message within the given session
    pub async fn respond(&self, session_id: &str, message: &str) -> Result<String, ChatError> {
        let handle = self.sessions.get_or_create(session_id).await;
        let mut history = handle.lock().await;

        let prompt = build_support_prompt(message, &history);
        let start_time = std::time::Instant::now();

        tracing::debug!(
            session = %session_id,
            history_len = history.len(),
            prompt_length = prompt.len(),
            "Initiating model call for support chat"
        );

        let reply = match self.model.generate(&prompt).await {
            Ok(reply) => {
                tracing::info!(
                    session = %session_id,
                    elapsed_ms = start_time.elapsed().as_millis(),
                    "Support chat model call completed"
                );
                reply
            }
            Err(e) => {
                tracing::error!(
                    session = %session_id,
                    elapsed_ms = start_time.elapsed().as_millis(),
                    error = %e,
                    "Support chat model call failed"
                );
                return Err(ChatError::Model(e));
            }
        };

        history.push(ChatTurn::user(message));
        history.push(ChatTurn::assistant(&reply));

        Ok(reply)
    }

    /// Recorded turns for a session; empty for unknown ids
    pub async fn history(&self, session_id: &str) -> Vec<ChatTurn> {
        self.sessions.read(session_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct CannedModel;

    #[async_trait]
    impl GenerativeModel for CannedModel {
        async fn generate(&self, _prompt: &str) -> Result<String, ModelError> {
            Ok("That sounds really hard. What would help most right now?".to_string())
        }
    }

    struct FailingModel;

    #[async_trait]
    impl GenerativeModel for FailingModel {
        async fn generate(&self, _prompt: &str) -> Result<String, ModelError> {
            Err(ModelError::EmptyResponse)
        }
    }

    #[tokio::test]
    async fn successful_exchange_records_user_then_assistant() {
        let service = SupportChatService::new(Arc::new(CannedModel));

        service.respond("s1", "I'm scared to go home").await.unwrap();
        service.respond("s1", "What can I do?").await.unwrap();

        let turns = service.history("s1").await;
        let flags: Vec<bool> = turns.iter().map(|t| t.is_user).collect();
        assert_eq!(flags, vec![true, false, true, false]);
        assert_eq!(turns[0].text, "I'm scared to go home");
        assert_eq!(turns[2].text, "What can I do?");
    }

    #[tokio::test]
    async fn failed_exchange_leaves_history_untouched() {
        let service = SupportChatService::new(Arc::new(FailingModel));

        let result = service.respond("s1", "hello").await;
        assert!(result.is_err());
        assert!(service.history("s1").await.is_empty());
    }

    #[tokio::test]
    async fn history_is_scoped_by_session() {
        let service = SupportChatService::new(Arc::new(CannedModel));

        service.respond("a", "first session").await.unwrap();

        assert_eq!(service.history("a").await.len(), 2);
        assert!(service.history("b").await.is_empty());
    }
}
