//! ContentRepository trait definition.
//!
//! Read/create access to the posts and videos whose view counters the
//! service maintains. Editing content is not part of this service.

use folio_types::content::{ContentKind, Post, Video};
use folio_types::error::RepositoryError;

/// Repository trait for post and video records.
///
/// Implementations live in folio-infra (e.g., `SqliteContentRepository`).
pub trait ContentRepository: Send + Sync {
    /// Insert a new post. Fails with `Conflict` if the id or slug is taken.
    fn create_post(
        &self,
        post: &Post,
    ) -> impl std::future::Future<Output = Result<Post, RepositoryError>> + Send;

    /// Insert a new video. Fails with `Conflict` if the id is taken.
    fn create_video(
        &self,
        video: &Video,
    ) -> impl std::future::Future<Output = Result<Video, RepositoryError>> + Send;

    fn get_post(
        &self,
        id: &str,
    ) -> impl std::future::Future<Output = Result<Option<Post>, RepositoryError>> + Send;

    /// Look a post up by its unique slug.
    fn get_post_by_slug(
        &self,
        slug: &str,
    ) -> impl std::future::Future<Output = Result<Option<Post>, RepositoryError>> + Send;

    /// Get a video by id. Soft-deleted videos are returned too; callers decide
    /// whether to hide them.
    fn get_video(
        &self,
        id: &str,
    ) -> impl std::future::Future<Output = Result<Option<Video>, RepositoryError>> + Send;

    /// Number of stored entities of the given kind (soft-deleted included).
    fn count(
        &self,
        kind: ContentKind,
    ) -> impl std::future::Future<Output = Result<u64, RepositoryError>> + Send;
}
