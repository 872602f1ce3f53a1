//! Session history service.
//!
//! Validates session ids and maps store failures to `HistoryError`.

use folio_types::error::HistoryError;
use folio_types::history::HistoryTurn;

use super::store::SessionHistoryStore;

/// Service wrapping a [`SessionHistoryStore`].
pub struct HistoryService<S: SessionHistoryStore> {
    store: S,
}

impl<S: SessionHistoryStore> HistoryService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub async fn append(&self, session_id: &str, turn: HistoryTurn) -> Result<(), HistoryError> {
        let session_id = require_session_id(Some(session_id))?;
        self.store.append(session_id, turn).await?;
        Ok(())
    }

    pub async fn history(&self, session_id: &str) -> Result<Vec<HistoryTurn>, HistoryError> {
        let session_id = require_session_id(Some(session_id))?;
        Ok(self.store.history(session_id).await?)
    }

    /// Clear a session. Unknown sessions are a no-op returning `false`;
    /// a missing or blank id is `MissingSessionId`.
    pub async fn clear(&self, session_id: Option<&str>) -> Result<bool, HistoryError> {
        let session_id = require_session_id(session_id)?;
        let removed = self.store.clear(session_id).await?;
        tracing::debug!(session_id, removed, "session history cleared");
        Ok(removed)
    }

    pub async fn session_count(&self) -> Result<u64, HistoryError> {
        Ok(self.store.session_count().await?)
    }
}

fn require_session_id(session_id: Option<&str>) -> Result<&str, HistoryError> {
    session_id
        .filter(|id| !id.trim().is_empty())
        .ok_or(HistoryError::MissingSessionId)
}
