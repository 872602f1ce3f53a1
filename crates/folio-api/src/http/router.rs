//! Axum router configuration with middleware.
//!
//! All JSON routes live under `/api/`. Middleware: CORS, request tracing.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        // Agent sessions
        .route(
            "/agent/clear-history",
            post(handlers::agent::clear_history),
        )
        // View counters
        .route(
            "/posts/increment-view",
            post(handlers::posts::increment_view),
        )
        .route("/videos/{id}", get(handlers::videos::get_video))
        .route("/videos/{id}/view", post(handlers::videos::record_view))
        // Presence
        .route(
            "/visitors/count",
            get(handlers::visitors::list_visitors).post(handlers::visitors::ping_visitor),
        )
        // Health
        .route(
            "/health/database",
            get(handlers::health::database_health),
        );

    Router::new()
        .nest("/api", api_routes)
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - Liveness check.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
