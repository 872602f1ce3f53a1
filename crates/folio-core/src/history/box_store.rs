//! BoxSessionHistoryStore -- object-safe dynamic dispatch wrapper for SessionHistoryStore.
//!
//! 1. Define an object-safe `SessionHistoryStoreDyn` trait with boxed futures
//! 2. Blanket-impl `SessionHistoryStoreDyn` for all `T: SessionHistoryStore`
//! 3. `BoxSessionHistoryStore` wraps `Arc<dyn SessionHistoryStoreDyn>` and delegates

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use folio_types::error::RepositoryError;
use folio_types::history::HistoryTurn;

use super::store::SessionHistoryStore;

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, RepositoryError>> + Send + 'a>>;

/// Object-safe version of [`SessionHistoryStore`] with boxed futures.
pub trait SessionHistoryStoreDyn: Send + Sync {
    fn append_boxed<'a>(&'a self, session_id: &'a str, turn: HistoryTurn) -> BoxFuture<'a, ()>;

    fn history_boxed<'a>(&'a self, session_id: &'a str) -> BoxFuture<'a, Vec<HistoryTurn>>;

    fn clear_boxed<'a>(&'a self, session_id: &'a str) -> BoxFuture<'a, bool>;

    fn session_count_boxed(&self) -> BoxFuture<'_, u64>;
}

impl<T: SessionHistoryStore> SessionHistoryStoreDyn for T {
    fn append_boxed<'a>(&'a self, session_id: &'a str, turn: HistoryTurn) -> BoxFuture<'a, ()> {
        Box::pin(self.append(session_id, turn))
    }

    fn history_boxed<'a>(&'a self, session_id: &'a str) -> BoxFuture<'a, Vec<HistoryTurn>> {
        Box::pin(self.history(session_id))
    }

    fn clear_boxed<'a>(&'a self, session_id: &'a str) -> BoxFuture<'a, bool> {
        Box::pin(self.clear(session_id))
    }

    fn session_count_boxed(&self) -> BoxFuture<'_, u64> {
        Box::pin(self.session_count())
    }
}

/// Type-erased session history store for runtime backend selection
/// (in-memory vs SQLite, chosen from `config.toml`).
///
/// Cheap to clone; clones share the same backend.
#[derive(Clone)]
pub struct BoxSessionHistoryStore {
    inner: Arc<dyn SessionHistoryStoreDyn>,
}

impl BoxSessionHistoryStore {
    pub fn new<T: SessionHistoryStore + 'static>(store: T) -> Self {
        Self {
            inner: Arc::new(store),
        }
    }
}

impl SessionHistoryStore for BoxSessionHistoryStore {
    async fn append(&self, session_id: &str, turn: HistoryTurn) -> Result<(), RepositoryError> {
        self.inner.append_boxed(session_id, turn).await
    }

    async fn history(&self, session_id: &str) -> Result<Vec<HistoryTurn>, RepositoryError> {
        self.inner.history_boxed(session_id).await
    }

    async fn clear(&self, session_id: &str) -> Result<bool, RepositoryError> {
        self.inner.clear_boxed(session_id).await
    }

    async fn session_count(&self) -> Result<u64, RepositoryError> {
        self.inner.session_count_boxed().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::InMemorySessionHistory;

    #[tokio::test]
    async fn boxed_store_delegates_to_inner() {
        let inner = InMemorySessionHistory::new();
        let boxed = BoxSessionHistoryStore::new(inner.clone());

        boxed.append("s", HistoryTurn::user("hi")).await.unwrap();
        assert_eq!(inner.history("s").await.unwrap().len(), 1);
        assert_eq!(boxed.session_count().await.unwrap(), 1);

        assert!(boxed.clear("s").await.unwrap());
        assert!(inner.history("s").await.unwrap().is_empty());
    }
}
