//! SQLite view counter implementation.
//!
//! Each increment is a single `UPDATE ... RETURNING` statement on the writer
//! pool, so concurrent increments never lose an update and a missing row is
//! reported without creating one.

use folio_core::views::ViewCounterRepository;
use folio_types::content::ContentKind;
use folio_types::error::RepositoryError;
use sqlx::Row;

use super::pool::DatabasePool;
use super::table_for;

/// SQLite-backed implementation of `ViewCounterRepository`.
#[derive(Clone)]
pub struct SqliteViewCounterRepository {
    pool: DatabasePool,
}

impl SqliteViewCounterRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

impl ViewCounterRepository for SqliteViewCounterRepository {
    async fn increment(&self, kind: ContentKind, id: &str) -> Result<i64, RepositoryError> {
        let sql = format!(
            "UPDATE {} SET view_count = view_count + 1 WHERE id = ? RETURNING view_count",
            table_for(kind)
        );

        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool.writer)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?
            .ok_or(RepositoryError::NotFound)?;

        row.try_get::<i64, _>("view_count")
            .map_err(|e| RepositoryError::Query(e.to_string()))
    }

    async fn view_count(&self, kind: ContentKind, id: &str) -> Result<Option<i64>, RepositoryError> {
        let sql = format!("SELECT view_count FROM {} WHERE id = ?", table_for(kind));

        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        row.map(|row| row.try_get::<i64, _>("view_count"))
            .transpose()
            .map_err(|e| RepositoryError::Query(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sqlite::pool::test_support::test_pool;
    use chrono::Utc;

    async fn insert_post(pool: &DatabasePool, id: &str, view_count: i64) {
        let now = Utc::now().to_rfc3339();
        sqlx::query(
            "INSERT INTO posts (id, title, slug, view_count, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(id)
        .bind("Test Post")
        .bind(format!("test-post-{id}"))
        .bind(view_count)
        .bind(&now)
        .bind(&now)
        .execute(&pool.writer)
        .await
        .unwrap();
    }

    async fn insert_video(pool: &DatabasePool, id: &str, view_count: i64, is_deleted: bool) {
        let now = Utc::now().to_rfc3339();
        sqlx::query(
            "INSERT INTO videos (id, title, view_count, is_deleted, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(id)
        .bind("Test Video")
        .bind(view_count)
        .bind(is_deleted)
        .bind(&now)
        .bind(&now)
        .execute(&pool.writer)
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_increment_returns_new_value() {
        let pool = test_pool().await;
        let repo = SqliteViewCounterRepository::new(pool.clone());
        insert_post(&pool, "p1", 5).await;

        assert_eq!(repo.increment(ContentKind::Post, "p1").await.unwrap(), 6);
        assert_eq!(repo.view_count(ContentKind::Post, "p1").await.unwrap(), Some(6));
    }

    #[tokio::test]
    async fn test_sequential_increments() {
        let pool = test_pool().await;
        let repo = SqliteViewCounterRepository::new(pool.clone());
        insert_video(&pool, "v1", 0, false).await;

        for _ in 0..25 {
            repo.increment(ContentKind::Video, "v1").await.unwrap();
        }
        assert_eq!(repo.view_count(ContentKind::Video, "v1").await.unwrap(), Some(25));
    }

    #[tokio::test]
    async fn test_concurrent_increments_are_not_lost() {
        let pool = test_pool().await;
        let repo = SqliteViewCounterRepository::new(pool.clone());
        insert_post(&pool, "p1", 5).await;

        let results = futures_util::future::join_all(
            (0..3).map(|_| repo.increment(ContentKind::Post, "p1")),
        )
        .await;

        let mut returned: Vec<i64> = results.into_iter().map(Result::unwrap).collect();
        returned.sort();
        assert_eq!(returned, vec![6, 7, 8]);
        assert_eq!(repo.view_count(ContentKind::Post, "p1").await.unwrap(), Some(8));
    }

    #[tokio::test]
    async fn test_concurrent_increments_across_tasks() {
        let pool = test_pool().await;
        let repo = SqliteViewCounterRepository::new(pool.clone());
        insert_video(&pool, "v1", 100, false).await;

        let mut handles = Vec::new();
        for _ in 0..40 {
            let repo = repo.clone();
            handles.push(tokio::spawn(async move {
                repo.increment(ContentKind::Video, "v1").await.unwrap()
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(repo.view_count(ContentKind::Video, "v1").await.unwrap(), Some(140));
    }

    #[tokio::test]
    async fn test_increment_missing_does_not_create() {
        let pool = test_pool().await;
        let repo = SqliteViewCounterRepository::new(pool.clone());

        let err = repo.increment(ContentKind::Post, "ghost").await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound));
        assert_eq!(repo.view_count(ContentKind::Post, "ghost").await.unwrap(), None);

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM posts")
            .fetch_one(&pool.reader)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn test_kinds_are_independent() {
        let pool = test_pool().await;
        let repo = SqliteViewCounterRepository::new(pool.clone());
        insert_post(&pool, "same-id", 0).await;
        insert_video(&pool, "same-id", 10, false).await;

        repo.increment(ContentKind::Post, "same-id").await.unwrap();

        assert_eq!(repo.view_count(ContentKind::Post, "same-id").await.unwrap(), Some(1));
        assert_eq!(repo.view_count(ContentKind::Video, "same-id").await.unwrap(), Some(10));
    }

    #[tokio::test]
    async fn test_soft_deleted_video_still_counts() {
        let pool = test_pool().await;
        let repo = SqliteViewCounterRepository::new(pool.clone());
        insert_video(&pool, "v-del", 2, true).await;

        assert_eq!(repo.increment(ContentKind::Video, "v-del").await.unwrap(), 3);
    }
}
