//! ViewCounterRepository trait definition.

use folio_types::content::ContentKind;
use folio_types::error::RepositoryError;

/// Repository trait for durable view counters.
///
/// Implementations must make `increment` atomic with respect to concurrent
/// callers: N successful calls raise the counter by exactly N.
/// Implementations live in folio-infra (e.g., `SqliteViewCounterRepository`).
pub trait ViewCounterRepository: Send + Sync {
    /// Add one to the entity's view count and return the new value.
    ///
    /// Returns `RepositoryError::NotFound` when no entity with `id` exists;
    /// in that case nothing is written.
    fn increment(
        &self,
        kind: ContentKind,
        id: &str,
    ) -> impl std::future::Future<Output = Result<i64, RepositoryError>> + Send;

    /// Current view count, or `None` if the entity does not exist.
    fn view_count(
        &self,
        kind: ContentKind,
        id: &str,
    ) -> impl std::future::Future<Output = Result<Option<i64>, RepositoryError>> + Send;
}
