use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use contracts::shared::core_response::CoreResponse;
use reqwest::Method;

use super::relay::relay;
use crate::shared::core_client::segment;
use crate::shared::state::AppState;

/// GET /api/jobs
pub async fn list_all(State(state): State<AppState>) -> (StatusCode, Json<CoreResponse>) {
    relay(&state.core, Method::GET, "/jobs", "Retrieve jobs").await
}

/// POST /api/jobs/:job_name/run
pub async fn run(
    State(state): State<AppState>,
    Path(job_name): Path<String>,
) -> (StatusCode, Json<CoreResponse>) {
    let path = format!("/jobs/{}/run", segment(&job_name));
    relay(&state.core, Method::POST, &path, &format!("Run job {}", job_name)).await
}

/// GET /api/jobs/:job_name/cache/:file_name
pub async fn get_cache_file(
    State(state): State<AppState>,
    Path((job_name, file_name)): Path<(String, String)>,
) -> (StatusCode, Json<CoreResponse>) {
    let path = cache_path(&job_name, &file_name);
    relay(&state.core, Method::GET, &path, "Get file from cache").await
}

/// DELETE /api/jobs/:job_name/cache/:file_name
pub async fn delete_cache_file(
    State(state): State<AppState>,
    Path((job_name, file_name)): Path<(String, String)>,
) -> (StatusCode, Json<CoreResponse>) {
    let path = cache_path(&job_name, &file_name);
    relay(&state.core, Method::DELETE, &path, "Delete file from cache").await
}

fn cache_path(job_name: &str, file_name: &str) -> String {
    format!("/jobs/{}/cache/{}", segment(job_name), segment(file_name))
}

#[cfg(test)]
mod tests {
    use crate::shared::test_support::{dead_upstream, serve, serve_proxy};
    use axum::extract::Path;
    use axum::http::StatusCode;
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use contracts::shared::core_response::{CoreResponse, ResponseType};
    use serde_json::json;

    #[tokio::test]
    async fn test_list_jobs_wrapped() {
        let core = serve(Router::new().route(
            "/jobs",
            get(|| async { Json(json!({"certbot-renew": {"every": "day"}})) }),
        ))
        .await;
        let proxy = serve_proxy(&core).await;

        let resp: CoreResponse = reqwest::get(format!("{}/api/jobs", proxy))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        assert_eq!(resp.kind, ResponseType::Success);
        assert_eq!(resp.status, 200);
        assert_eq!(resp.message, "Retrieve jobs");
        assert_eq!(resp.data["certbot-renew"]["every"], "day");
    }

    #[tokio::test]
    async fn test_run_job_encodes_name() {
        let core = serve(Router::new().route(
            "/jobs/:job_name/run",
            post(|Path(job_name): Path<String>| async move { Json(json!({ "ran": job_name })) }),
        ))
        .await;
        let proxy = serve_proxy(&core).await;

        let resp: CoreResponse = reqwest::Client::new()
            .post(format!("{}/api/jobs/my%20job/run", proxy))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        assert!(resp.is_success());
        assert_eq!(resp.message, "Run job my job");
        assert_eq!(resp.data["ran"], "my job");
    }

    #[tokio::test]
    async fn test_missing_cache_file_keeps_status() {
        let core = serve(Router::new()).await;
        let proxy = serve_proxy(&core).await;

        let response = reqwest::get(format!("{}/api/jobs/job/cache/file.txt", proxy))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let resp: CoreResponse = response.json().await.unwrap();
        assert_eq!(resp.kind, ResponseType::Error);
        assert_eq!(resp.message, "Get file from cache failed");
    }

    #[tokio::test]
    async fn test_unreachable_core_is_bad_gateway() {
        let proxy = serve_proxy(&dead_upstream().await).await;

        let response = reqwest::Client::new()
            .delete(format!("{}/api/jobs/job/cache/file.txt", proxy))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let resp: CoreResponse = response.json().await.unwrap();
        assert_eq!(resp.message, "Delete file from cache failed");
        assert_eq!(resp.data, serde_json::Value::Null);
    }
}
