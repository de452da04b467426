use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::shared::proxy::ProxyErrorBody;
use thiserror::Error;

/// Ошибки обращения к core API.
///
/// Клиент видит только общее сообщение `fail getting data`,
/// причина пишется в лог.
#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("upstream request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("upstream returned status {0}")]
    UpstreamStatus(u16),
    #[error("failed to read upstream body: {0}")]
    Body(#[source] reqwest::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::warn!("Proxy request failed: {}", self);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ProxyErrorBody::generic()),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_maps_to_500() {
        let response = ProxyError::UpstreamStatus(404).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
