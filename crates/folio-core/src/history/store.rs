//! SessionHistoryStore trait definition.

use folio_types::error::RepositoryError;
use folio_types::history::HistoryTurn;

/// Store for per-session conversation turns.
///
/// Sessions are created implicitly by the first `append` and removed by
/// `clear`. Uses native async fn in traits (RPITIT, Rust 2024 edition).
pub trait SessionHistoryStore: Send + Sync {
    /// Append a turn to the end of a session, creating the session if needed.
    fn append(
        &self,
        session_id: &str,
        turn: HistoryTurn,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// All turns of a session in insertion order. Empty if the session is unknown.
    fn history(
        &self,
        session_id: &str,
    ) -> impl std::future::Future<Output = Result<Vec<HistoryTurn>, RepositoryError>> + Send;

    /// Drop every turn of a session.
    ///
    /// Idempotent: clearing an unknown session is not an error. Returns
    /// whether anything was removed.
    fn clear(
        &self,
        session_id: &str,
    ) -> impl std::future::Future<Output = Result<bool, RepositoryError>> + Send;

    /// Number of sessions currently holding at least one turn.
    fn session_count(
        &self,
    ) -> impl std::future::Future<Output = Result<u64, RepositoryError>> + Send;
}
