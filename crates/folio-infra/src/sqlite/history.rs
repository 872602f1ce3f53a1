//! SQLite session history implementation.
//!
//! Turns are rows in `session_turns`; insertion order is the autoincrement id.

use chrono::Utc;
use folio_core::history::SessionHistoryStore;
use folio_types::error::RepositoryError;
use folio_types::history::{HistoryTurn, TurnRole};
use sqlx::Row;

use super::pool::DatabasePool;

/// Persistent implementation of `SessionHistoryStore`.
#[derive(Clone)]
pub struct SqliteSessionHistory {
    pool: DatabasePool,
}

impl SqliteSessionHistory {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

impl SessionHistoryStore for SqliteSessionHistory {
    async fn append(&self, session_id: &str, turn: HistoryTurn) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO session_turns (session_id, role, content, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(session_id)
        .bind(turn.role.to_string())
        .bind(&turn.content)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool.writer)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(())
    }

    async fn history(&self, session_id: &str) -> Result<Vec<HistoryTurn>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT role, content FROM session_turns WHERE session_id = ? ORDER BY id ASC",
        )
        .bind(session_id)
        .fetch_all(&self.pool.reader)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let mut turns = Vec::with_capacity(rows.len());
        for row in &rows {
            let role: String = row
                .try_get("role")
                .map_err(|e| RepositoryError::Query(e.to_string()))?;
            let content: String = row
                .try_get("content")
                .map_err(|e| RepositoryError::Query(e.to_string()))?;
            let role: TurnRole = role.parse().map_err(RepositoryError::Query)?;
            turns.push(HistoryTurn { role, content });
        }

        Ok(turns)
    }

    async fn clear(&self, session_id: &str) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM session_turns WHERE session_id = ?")
            .bind(session_id)
            .execute(&self.pool.writer)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }

    async fn session_count(&self) -> Result<u64, RepositoryError> {
        let row = sqlx::query("SELECT COUNT(DISTINCT session_id) AS n FROM session_turns")
            .fetch_one(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let n: i64 = row
            .try_get("n")
            .map_err(|e| RepositoryError::Query(e.to_string()))?;
        Ok(n.max(0) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sqlite::pool::test_support::test_pool;

    #[tokio::test]
    async fn test_append_and_history_in_order() {
        let store = SqliteSessionHistory::new(test_pool().await);
        store.append("s1", HistoryTurn::user("what is rust?")).await.unwrap();
        store.append("s1", HistoryTurn::assistant("a language")).await.unwrap();

        let turns = store.history("s1").await.unwrap();
        assert_eq!(
            turns,
            vec![
                HistoryTurn::user("what is rust?"),
                HistoryTurn::assistant("a language"),
            ]
        );
    }

    #[tokio::test]
    async fn test_clear_missing_is_noop() {
        let store = SqliteSessionHistory::new(test_pool().await);
        assert!(!store.clear("never").await.unwrap());
    }

    #[tokio::test]
    async fn test_clear_is_idempotent() {
        let store = SqliteSessionHistory::new(test_pool().await);
        store.append("s1", HistoryTurn::user("q")).await.unwrap();
        store.append("s2", HistoryTurn::user("q")).await.unwrap();

        assert!(store.clear("s1").await.unwrap());
        assert!(store.history("s1").await.unwrap().is_empty());
        assert!(!store.clear("s1").await.unwrap());
        assert!(store.history("s1").await.unwrap().is_empty());

        assert_eq!(store.session_count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_history_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let store = SqliteSessionHistory::new(DatabasePool::open_in(dir.path()).await.unwrap());
            store.append("persist", HistoryTurn::user("remember me")).await.unwrap();
        }

        let store = SqliteSessionHistory::new(DatabasePool::open_in(dir.path()).await.unwrap());
        assert_eq!(store.history("persist").await.unwrap().len(), 1);
    }
}
