use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use contracts::shared::core_response::CoreResponse;
use reqwest::Method;

use super::relay::relay;
use crate::shared::state::AppState;

/// GET /api/logs/ui
pub async fn ui(State(state): State<AppState>) -> (StatusCode, Json<CoreResponse>) {
    relay(&state.core, Method::GET, "/logs/ui", "Retrieve ui logs").await
}

/// GET /api/logs/core
pub async fn core(State(state): State<AppState>) -> (StatusCode, Json<CoreResponse>) {
    relay(&state.core, Method::GET, "/logs/core", "Retrieve core logs").await
}

#[cfg(test)]
mod tests {
    use crate::shared::test_support::{serve, serve_proxy};
    use axum::routing::get;
    use axum::Router;
    use contracts::shared::core_response::CoreResponse;

    #[tokio::test]
    async fn test_plain_text_logs_wrapped_as_string() {
        let core = serve(Router::new().route("/logs/core", get(|| async { "line 1\nline 2" })))
            .await;
        let proxy = serve_proxy(&core).await;

        let resp: CoreResponse = reqwest::get(format!("{}/api/logs/core", proxy))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        assert!(resp.is_success());
        assert_eq!(resp.message, "Retrieve core logs");
        assert_eq!(resp.data, serde_json::Value::String("line 1\nline 2".into()));
    }
}
