//! Agent session handlers.
//!
//! Endpoints:
//! - POST /api/agent/clear-history - Drop the stored turns of a chat session

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;

use folio_types::error::HistoryError;

use crate::http::handlers::parse_body;
use crate::http::response::{ClearHistoryRequest, MessageBody};
use crate::state::AppState;

/// POST /api/agent/clear-history
///
/// Always answers 200: unknown sessions, a missing `sessionId`, and store
/// failures all leave the caller with an empty history as far as it can tell.
pub async fn clear_history(State(state): State<AppState>, body: Bytes) -> Json<MessageBody> {
    let request: ClearHistoryRequest = parse_body(&body);

    match state.history.clear(request.session_id.as_deref()).await {
        Ok(_) => {}
        Err(HistoryError::MissingSessionId) => {
            tracing::debug!("clear-history called without a session id");
        }
        Err(e) => tracing::error!(
            session_id = request.session_id.as_deref().unwrap_or_default(),
            error = %e,
            "failed to clear session history"
        ),
    }

    Json(MessageBody {
        message: "History cleared".to_string(),
    })
}
