use axum::http::StatusCode;
use axum::Json;
use contracts::shared::core_response::CoreResponse;
use reqwest::Method;

use crate::shared::core_client::CoreClient;

/// Проксирует запрос в core API и заворачивает ответ в `CoreResponse`.
///
/// `action` - человекочитаемое описание операции ("Retrieve jobs"),
/// при ошибке к нему добавляется " failed".
pub async fn relay(
    core: &CoreClient,
    method: Method,
    path: &str,
    action: &str,
) -> (StatusCode, Json<CoreResponse>) {
    match core.send(method, path).await {
        Ok(upstream) => {
            let status =
                StatusCode::from_u16(upstream.status).unwrap_or(StatusCode::BAD_GATEWAY);
            let data = upstream.json_or_text();
            let body = if upstream.is_success() {
                CoreResponse::success(upstream.status, action, data)
            } else {
                tracing::warn!("{} failed: core returned {}", action, upstream.status);
                CoreResponse {
                    data,
                    ..CoreResponse::error(upstream.status, format!("{} failed", action))
                }
            };
            (status, Json(body))
        }
        Err(e) => {
            tracing::warn!("{} failed: {}", action, e);
            (
                StatusCode::BAD_GATEWAY,
                Json(CoreResponse::error(
                    StatusCode::BAD_GATEWAY.as_u16(),
                    format!("{} failed", action),
                )),
            )
        }
    }
}
