//! SQLite content repository implementation.
//!
//! Implements `ContentRepository` from `folio-core` using raw sqlx queries,
//! private Row structs, and the split reader/writer pool.

use chrono::{DateTime, Utc};
use folio_core::content::ContentRepository;
use folio_types::content::{ContentKind, Post, Video};
use folio_types::error::RepositoryError;
use sqlx::Row;

use super::pool::DatabasePool;
use super::table_for;

/// SQLite-backed implementation of `ContentRepository`.
#[derive(Clone)]
pub struct SqliteContentRepository {
    pool: DatabasePool,
}

impl SqliteContentRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    async fn fetch_post(&self, sql: &str, key: &str) -> Result<Option<Post>, RepositoryError> {
        let row = sqlx::query(sql)
            .bind(key)
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        row.map(|row| {
            PostRow::from_row(&row)
                .map_err(|e| RepositoryError::Query(e.to_string()))?
                .into_post()
        })
        .transpose()
    }
}

// ---------------------------------------------------------------------------
// Private Row types for SQLite-to-domain mapping
// ---------------------------------------------------------------------------

struct PostRow {
    id: String,
    title: String,
    slug: String,
    view_count: i64,
    created_at: String,
    updated_at: String,
}

impl PostRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            slug: row.try_get("slug")?,
            view_count: row.try_get("view_count")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }

    fn into_post(self) -> Result<Post, RepositoryError> {
        Ok(Post {
            id: self.id,
            title: self.title,
            slug: self.slug,
            view_count: self.view_count,
            created_at: parse_datetime(&self.created_at)?,
            updated_at: parse_datetime(&self.updated_at)?,
        })
    }
}

struct VideoRow {
    id: String,
    title: String,
    description: String,
    view_count: i64,
    is_public: bool,
    is_deleted: bool,
    created_at: String,
    updated_at: String,
}

impl VideoRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            description: row.try_get("description")?,
            view_count: row.try_get("view_count")?,
            is_public: row.try_get("is_public")?,
            is_deleted: row.try_get("is_deleted")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }

    fn into_video(self) -> Result<Video, RepositoryError> {
        Ok(Video {
            id: self.id,
            title: self.title,
            description: self.description,
            view_count: self.view_count,
            is_public: self.is_public,
            is_deleted: self.is_deleted,
            created_at: parse_datetime(&self.created_at)?,
            updated_at: parse_datetime(&self.updated_at)?,
        })
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse_datetime(s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Query(format!("invalid datetime: {e}")))
}

fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

fn map_insert_error(e: sqlx::Error, what: String) -> RepositoryError {
    match e {
        sqlx::Error::Database(db_err) if db_err.message().contains("UNIQUE") => {
            RepositoryError::Conflict(format!("{what} already exists"))
        }
        other => RepositoryError::Query(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// ContentRepository implementation
// ---------------------------------------------------------------------------

impl ContentRepository for SqliteContentRepository {
    async fn create_post(&self, post: &Post) -> Result<Post, RepositoryError> {
        sqlx::query(
            "INSERT INTO posts (id, title, slug, view_count, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&post.id)
        .bind(&post.title)
        .bind(&post.slug)
        .bind(post.view_count)
        .bind(format_datetime(&post.created_at))
        .bind(format_datetime(&post.updated_at))
        .execute(&self.pool.writer)
        .await
        .map_err(|e| map_insert_error(e, format!("post '{}'", post.slug)))?;

        Ok(post.clone())
    }

    async fn create_video(&self, video: &Video) -> Result<Video, RepositoryError> {
        sqlx::query(
            "INSERT INTO videos (id, title, description, view_count, is_public, is_deleted, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&video.id)
        .bind(&video.title)
        .bind(&video.description)
        .bind(video.view_count)
        .bind(video.is_public)
        .bind(video.is_deleted)
        .bind(format_datetime(&video.created_at))
        .bind(format_datetime(&video.updated_at))
        .execute(&self.pool.writer)
        .await
        .map_err(|e| map_insert_error(e, format!("video '{}'", video.id)))?;

        Ok(video.clone())
    }

    async fn get_post(&self, id: &str) -> Result<Option<Post>, RepositoryError> {
        self.fetch_post("SELECT * FROM posts WHERE id = ?", id).await
    }

    async fn get_post_by_slug(&self, slug: &str) -> Result<Option<Post>, RepositoryError> {
        self.fetch_post("SELECT * FROM posts WHERE slug = ?", slug).await
    }

    async fn get_video(&self, id: &str) -> Result<Option<Video>, RepositoryError> {
        let row = sqlx::query("SELECT * FROM videos WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        match row {
            Some(row) => {
                let video_row =
                    VideoRow::from_row(&row).map_err(|e| RepositoryError::Query(e.to_string()))?;
                Ok(Some(video_row.into_video()?))
            }
            None => Ok(None),
        }
    }

    async fn count(&self, kind: ContentKind) -> Result<u64, RepositoryError> {
        let sql = format!("SELECT COUNT(*) AS n FROM {}", table_for(kind));
        let row = sqlx::query(&sql)
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
    use folio_types::content::slugify;

    fn make_post(id: &str, title: &str) -> Post {
        let now = Utc::now();
        Post {
            id: id.to_string(),
            title: title.to_string(),
            slug: slugify(title),
            view_count: 0,
            created_at: now,
            updated_at: now,
        }
    }

    fn make_video(id: &str, is_deleted: bool) -> Video {
        let now = Utc::now();
        Video {
            id: id.to_string(),
            title: format!("Video {id}"),
            description: "A test clip".to_string(),
            view_count: 7,
            is_public: true,
            is_deleted,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_create_and_get_post() {
        let repo = SqliteContentRepository::new(test_pool().await);
        repo.create_post(&make_post("p1", "Hello World")).await.unwrap();

        let post = repo.get_post("p1").await.unwrap().unwrap();
        assert_eq!(post.slug, "hello-world");
        assert_eq!(post.view_count, 0);
    }

    #[tokio::test]
    async fn test_get_post_by_slug() {
        let repo = SqliteContentRepository::new(test_pool().await);
        repo.create_post(&make_post("p1", "Hello World")).await.unwrap();

        let post = repo.get_post_by_slug("hello-world").await.unwrap().unwrap();
        assert_eq!(post.id, "p1");
        assert!(repo.get_post_by_slug("p1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_slug_conflicts() {
        let repo = SqliteContentRepository::new(test_pool().await);
        repo.create_post(&make_post("p1", "Same Title")).await.unwrap();

        let err = repo.create_post(&make_post("p2", "Same Title")).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_create_and_get_video() {
        let repo = SqliteContentRepository::new(test_pool().await);
        repo.create_video(&make_video("v1", false)).await.unwrap();

        let video = repo.get_video("v1").await.unwrap().unwrap();
        assert_eq!(video.view_count, 7);
        assert!(video.is_public);
        assert!(!video.is_deleted);
    }

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let repo = SqliteContentRepository::new(test_pool().await);
        assert!(repo.get_post("nope").await.unwrap().is_none());
        assert!(repo.get_video("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_count_includes_soft_deleted() {
        let repo = SqliteContentRepository::new(test_pool().await);
        repo.create_video(&make_video("v1", false)).await.unwrap();
        repo.create_video(&make_video("v2", true)).await.unwrap();
        repo.create_post(&make_post("p1", "Only Post")).await.unwrap();

        assert_eq!(repo.count(ContentKind::Video).await.unwrap(), 2);
        assert_eq!(repo.count(ContentKind::Post).await.unwrap(), 1);
    }
}
