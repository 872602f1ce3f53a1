//! Database liveness probe.

use std::time::Instant;

use folio_types::health::DatabaseHealth;

use super::pool::DatabasePool;

/// Run `SELECT 1` against the reader pool and time it.
pub async fn check_database_health(pool: &DatabasePool) -> DatabaseHealth {
    let start = Instant::now();
    let result = sqlx::query("SELECT 1").execute(&pool.reader).await;
    let response_time_ms = start.elapsed().as_millis() as u64;

    match result {
        Ok(_) => DatabaseHealth {
            is_connected: true,
            response_time_ms,
            error: None,
        },
        Err(e) => {
            tracing::warn!(error = %e, "database health check failed");
            DatabaseHealth {
                is_connected: false,
                response_time_ms,
                error: Some(e.to_string()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sqlite::pool::test_support::test_pool;

    #[tokio::test]
    async fn test_healthy_pool() {
        let pool = test_pool().await;
        let health = check_database_health(&pool).await;
        assert!(health.is_connected);
        assert!(health.error.is_none());
    }

    #[tokio::test]
    async fn test_closed_pool_is_unhealthy() {
        let pool = test_pool().await;
        pool.reader.close().await;

        let health = check_database_health(&pool).await;
        assert!(!health.is_connected);
        assert!(health.error.is_some());
    }
}
