use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::shared::state::AppState;

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // Instances (verbatim proxy)
        .route("/api/instances", post(handlers::instances::list))
        // Jobs
        .route("/api/jobs", get(handlers::jobs::list_all))
        .route("/api/jobs/:job_name/run", post(handlers::jobs::run))
        .route(
            "/api/jobs/:job_name/cache/:file_name",
            get(handlers::jobs::get_cache_file).delete(handlers::jobs::delete_cache_file),
        )
        // Logs
        .route("/api/logs/ui", get(handlers::logs::ui))
        .route("/api/logs/core", get(handlers::logs::core))
        // Plugins
        .route("/api/plugins", get(handlers::plugins::list_all))
        .with_state(state)
}
