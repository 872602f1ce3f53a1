//! View counting service.
//!
//! Validates identifiers, delegates the atomic increment to the repository,
//! and maps storage failures to `ViewError`.

use folio_types::content::ContentKind;
use folio_types::error::{RepositoryError, ViewError};

use super::repository::ViewCounterRepository;

/// Service wrapping a [`ViewCounterRepository`].
///
/// Generic over the repository so folio-core never depends on folio-infra.
pub struct ViewService<R: ViewCounterRepository> {
    repo: R,
}

impl<R: ViewCounterRepository> ViewService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Access the underlying repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Record one view and return the new count.
    ///
    /// `None`, empty and whitespace-only ids are rejected before touching storage.
    pub async fn record_view(&self, kind: ContentKind, id: Option<&str>) -> Result<i64, ViewError> {
        let id = id
            .filter(|id| !id.trim().is_empty())
            .ok_or(ViewError::MissingId(kind))?;

        match self.repo.increment(kind, id).await {
            Ok(view_count) => {
                tracing::debug!(%kind, id, view_count, "view recorded");
                Ok(view_count)
            }
            Err(RepositoryError::NotFound) => Err(ViewError::NotFound {
                kind,
                id: id.to_string(),
            }),
            Err(e) => Err(ViewError::StorageError(e.to_string())),
        }
    }

    /// Read the current count without changing it.
    pub async fn view_count(&self, kind: ContentKind, id: &str) -> Result<i64, ViewError> {
        self.repo
            .view_count(kind, id)
            .await
            .map_err(|e| ViewError::StorageError(e.to_string()))?
            .ok_or_else(|| ViewError::NotFound {
                kind,
                id: id.to_string(),
            })
    }
}
