//! In-memory session history store
//!
//! Process-wide map from session id to the ordered turns of one conversation.
//! Entries are created lazily, grow by one user/assistant pair per successful
//! exchange, and live for the process lifetime: there is no eviction and no
//! capacity cap. Multi-instance deployments need an externally shared,
//! expiring store; see DESIGN.md.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use crate::model::ChatTurn;

/// Handle to one session's history
///
/// The mutex is the unit of serialization: the chat service holds it across a
/// full exchange (compose, model call, append) so concurrent requests against
/// the same session id cannot interleave their read-then-append and turn
/// order within a session stays defined. Requests against different sessions
/// never contend.
pub type SessionHandle = Arc<Mutex<Vec<ChatTurn>>>;

/// Process-wide store owning all session histories
#[derive(Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<String, SessionHandle>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the handle for a session, creating an empty one on first reference
    pub async fn get_or_create(&self, session_id: &str) -> SessionHandle {
        {
            let sessions = self.sessions.read().await;
            if let Some(handle) = sessions.get(session_id) {
                return Arc::clone(handle);
            }
        }

        let mut sessions = self.sessions.write().await;
        Arc::clone(sessions.entry(session_id.to_string()).or_default())
    }

    /// Snapshot of a session's turns in chronological order
    ///
    /// Unknown session ids yield an empty sequence, never an error.
    pub async fn read(&self, session_id: &str) -> Vec<ChatTurn> {
        let handle = {
            let sessions = self.sessions.read().await;
            sessions.get(session_id).map(Arc::clone)
        };

        match handle {
            Some(handle) => handle.lock().await.clone(),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unknown_session_reads_empty() {
        let store = SessionStore::new();
        assert!(store.read("nobody").await.is_empty());
    }

    #[tokio::test]
    async fn appending_two_pairs_keeps_chronological_order() {
        let store = SessionStore::new();

        for (question, answer) in [("first", "reply one"), ("second", "reply two")] {
            let handle = store.get_or_create("abc").await;
            let mut history = handle.lock().await;
            history.push(ChatTurn::user(question));
            history.push(ChatTurn::assistant(answer));
        }

        let turns = store.read("abc").await;
        assert_eq!(turns.len(), 4);
        let flags: Vec<bool> = turns.iter().map(|t| t.is_user).collect();
        assert_eq!(flags, vec![true, false, true, false]);
        assert_eq!(turns[2].text, "second");
    }

    #[tokio::test]
    async fn sessions_are_isolated() {
        let store = SessionStore::new();

        let handle = store.get_or_create("a").await;
        handle.lock().await.push(ChatTurn::user("hello"));

        assert_eq!(store.read("a").await.len(), 1);
        assert!(store.read("b").await.is_empty());
    }

    #[tokio::test]
    async fn get_or_create_returns_the_same_history() {
        let store = SessionStore::new();

        let first = store.get_or_create("abc").await;
        first.lock().await.push(ChatTurn::user("hi"));

        let second = store.get_or_create("abc").await;
        assert_eq!(second.lock().await.len(), 1);
    }
}
