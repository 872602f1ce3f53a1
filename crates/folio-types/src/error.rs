use thiserror::Error;

use crate::content::ContentKind;

/// Errors from repository and store operations (used by trait definitions in folio-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),

    #[error("entity not found")]
    NotFound,

    #[error("conflict: {0}")]
    Conflict(String),
}

/// Errors related to view counting.
#[derive(Debug, Error)]
pub enum ViewError {
    #[error("missing {0} id")]
    MissingId(ContentKind),

    #[error("{kind} '{id}' not found")]
    NotFound { kind: ContentKind, id: String },

    #[error("storage error: {0}")]
    StorageError(String),
}

/// Errors related to session history operations.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("missing session id")]
    MissingSessionId,

    #[error("storage error: {0}")]
    StorageError(String),
}

impl From<RepositoryError> for HistoryError {
    fn from(e: RepositoryError) -> Self {
        HistoryError::StorageError(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_error_display() {
        let err = ViewError::NotFound {
            kind: ContentKind::Post,
            id: "p1".to_string(),
        };
        assert_eq!(err.to_string(), "post 'p1' not found");
        assert_eq!(ViewError::MissingId(ContentKind::Video).to_string(), "missing video id");
    }

    #[test]
    fn test_repository_error_display() {
        let err = RepositoryError::Query("syntax error".to_string());
        assert_eq!(err.to_string(), "query error: syntax error");
    }

    #[test]
    fn test_history_error_from_repository() {
        let err: HistoryError = RepositoryError::Connection.into();
        assert_eq!(err.to_string(), "storage error: database connection error");
    }
}
