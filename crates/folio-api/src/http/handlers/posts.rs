//! Post handlers.
//!
//! Endpoints:
//! - POST /api/posts/increment-view - Count one read of a post

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;

use folio_types::content::ContentKind;
use folio_types::error::ViewError;

use crate::http::error::AppError;
use crate::http::handlers::parse_body;
use crate::http::response::{IncrementViewRequest, IncrementViewResponse};
use crate::state::AppState;

/// POST /api/posts/increment-view
///
/// Body `{ "postId": "..." }`. A missing or blank id is a 400, as is a body
/// that does not decode (including a non-string `postId`). Any storage
/// failure, including an unknown id, is a 500.
pub async fn increment_view(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<IncrementViewResponse>, AppError> {
    let request: IncrementViewRequest = parse_body(&body);

    let view_count = state
        .view_service
        .record_view(ContentKind::Post, request.post_id.as_deref())
        .await
        .map_err(|e| match e {
            ViewError::MissingId(_) => AppError::Validation("Missing post ID".to_string()),
            other => AppError::internal("Operation failed", other),
        })?;

    Ok(Json(IncrementViewResponse {
        success: true,
        view_count,
    }))
}
