//! Online visitor handlers.
//!
//! Endpoints:
//! - GET  /api/visitors/count - Who is online right now (addresses masked)
//! - POST /api/visitors/count - Heartbeat from a visitor

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::http::extractors::client_ip::ClientIp;
use crate::http::handlers::parse_body;
use crate::http::response::{FailureBody, VisitorCount, VisitorList, VisitorPing, VisitorView};
use crate::state::AppState;

/// GET /api/visitors/count
pub async fn list_visitors(State(state): State<AppState>) -> Json<VisitorList> {
    let visitors: Vec<VisitorView> = state
        .visitors
        .snapshot()
        .into_iter()
        .map(VisitorView::from)
        .collect();

    Json(VisitorList {
        success: true,
        count: visitors.len(),
        visitors,
    })
}

/// POST /api/visitors/count
///
/// Body `{ "visitorId": "...", "userAgent": "..." }`.
pub async fn ping_visitor(
    State(state): State<AppState>,
    ClientIp(ip): ClientIp,
    body: Bytes,
) -> Result<Json<VisitorCount>, (StatusCode, Json<FailureBody>)> {
    let ping: VisitorPing = parse_body(&body);

    let Some(visitor_id) = ping.visitor_id.as_deref().filter(|id| !id.is_empty()) else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(FailureBody::new("Visitor ID is required")),
        ));
    };

    let count = state
        .visitors
        .touch(visitor_id, ping.user_agent.as_deref(), &ip);

    Ok(Json(VisitorCount {
        success: true,
        count,
    }))
}
