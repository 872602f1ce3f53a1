//! Video handlers.
//!
//! Endpoints:
//! - GET  /api/videos/{id}      - Fetch a single (non-deleted) video
//! - POST /api/videos/{id}/view - Count one view of a video

use axum::extract::{Path, State};
use axum::Json;

use folio_core::content::ContentRepository;
use folio_types::content::{ContentKind, Video};

use crate::http::error::AppError;
use crate::http::response::SuccessBody;
use crate::state::AppState;

/// GET /api/videos/{id}
pub async fn get_video(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Video>, AppError> {
    let video = state
        .content_repo
        .get_video(&id)
        .await
        .map_err(|e| AppError::internal("Failed to fetch video", e))?
        .filter(|video| !video.is_deleted)
        .ok_or_else(|| AppError::NotFound("Video not found".to_string()))?;

    Ok(Json(video))
}

/// POST /api/videos/{id}/view
///
/// Every failure, including an unknown id, is reported as a 500.
pub async fn record_view(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SuccessBody>, AppError> {
    state
        .view_service
        .record_view(ContentKind::Video, Some(&id))
        .await
        .map_err(|e| AppError::internal("Failed to increment video views", e))?;

    Ok(Json(SuccessBody { success: true }))
}
