use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use contracts::shared::core_response::CoreResponse;
use reqwest::Method;

use super::relay::relay;
use crate::shared::state::AppState;

/// GET /api/plugins - схема настроек для страницы глобальной конфигурации
pub async fn list_all(State(state): State<AppState>) -> (StatusCode, Json<CoreResponse>) {
    relay(&state.core, Method::GET, "/plugins", "Retrieve plugins").await
}
