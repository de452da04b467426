use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use reqwest::Method;

use crate::shared::error::ProxyError;
use crate::shared::state::AppState;

/// POST /api/instances
///
/// Пересылает запрос в `POST {core}/instances` и возвращает тело ответа как есть.
/// Тело входящего запроса не проверяется и не пересылается.
pub async fn list(State(state): State<AppState>) -> Result<Response, ProxyError> {
    let upstream = state
        .core
        .send(Method::POST, "/instances")
        .await?
        .ensure_success()?;

    let status = StatusCode::from_u16(upstream.status).unwrap_or(StatusCode::OK);
    let content_type = upstream
        .content_type
        .unwrap_or_else(|| "application/json".to_string());

    Ok((status, [(header::CONTENT_TYPE, content_type)], upstream.body).into_response())
}
