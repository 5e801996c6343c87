use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::handlers;
use super::AppState;

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", api_routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// API routes under /api/v1
fn api_routes() -> Router<AppState> {
    Router::new()
        // Submissions
        .route("/submissions", post(handlers::submit))
        .route("/submissions/status", get(handlers::submission_status))
        // History
        .route("/history", get(handlers::get_history))
        .route("/history/export", post(handlers::export_history))
        // Posters
        .route("/posters/*path", get(handlers::get_poster))
        // Theme
        .route("/theme", get(handlers::get_theme))
        .route("/theme/toggle", post(handlers::toggle_theme))
}
