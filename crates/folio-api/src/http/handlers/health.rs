//! Health endpoints.
//!
//! Endpoints:
//! - GET /api/health/database - Database connectivity probe

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use folio_infra::sqlite::health::check_database_health;

use crate::http::response::DatabaseHealthBody;
use crate::state::AppState;

/// GET /api/health/database - 200 when `SELECT 1` succeeds, 503 otherwise.
pub async fn database_health(
    State(state): State<AppState>,
) -> (StatusCode, Json<DatabaseHealthBody>) {
    let health = check_database_health(&state.db_pool).await;
    let timestamp = chrono::Utc::now().to_rfc3339();

    if health.is_connected {
        (
            StatusCode::OK,
            Json(DatabaseHealthBody {
                status: "healthy",
                message: "Database connection OK",
                error: None,
                response_time: health.response_time_ms,
                timestamp,
            }),
        )
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(DatabaseHealthBody {
                status: "unhealthy",
                message: "Database connection failed",
                error: health.error,
                response_time: health.response_time_ms,
                timestamp,
            }),
        )
    }
}
