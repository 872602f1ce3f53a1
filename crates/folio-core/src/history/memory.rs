//! Process-local session history backed by `DashMap`.
//!
//! Turns are cloned on read so no `DashMap` guard outlives a call.

use std::sync::Arc;

use dashmap::DashMap;
use folio_types::error::RepositoryError;
use folio_types::history::HistoryTurn;

use super::store::SessionHistoryStore;

/// In-memory session history. Lost when the process exits.
///
/// Cloning produces a shared view of the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionHistory {
    sessions: Arc<DashMap<String, Vec<HistoryTurn>>>,
}

impl InMemorySessionHistory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionHistoryStore for InMemorySessionHistory {
    async fn append(&self, session_id: &str, turn: HistoryTurn) -> Result<(), RepositoryError> {
        self.sessions
            .entry(session_id.to_string())
            .or_default()
            .push(turn);
        Ok(())
    }

    async fn history(&self, session_id: &str) -> Result<Vec<HistoryTurn>, RepositoryError> {
        Ok(self
            .sessions
            .get(session_id)
            .map(|turns| turns.value().clone())
            .unwrap_or_default())
    }

    async fn clear(&self, session_id: &str) -> Result<bool, RepositoryError> {
        Ok(self.sessions.remove(session_id).is_some())
    }

    async fn session_count(&self) -> Result<u64, RepositoryError> {
        Ok(self.sessions.len() as u64)
    }
}
